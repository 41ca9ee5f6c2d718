use {
    assetarc::{AssetCategory, Catalog, PointerTarget, SearchWidget},
    std::sync::Arc,
};

fn widget() -> SearchWidget {
    SearchWidget::new(Arc::new(Catalog::builtin()))
}

fn shown(w: &SearchWidget) -> Vec<String> {
    w.results()
        .iter()
        .map(|a| format!("{} ({})", a.label(), a.symbol()))
        .collect()
}

#[test]
fn bit_shows_bitcoin_then_bitcoin_cash() {
    let mut w = widget();
    w.handle_query_change("bit");
    assert_eq!(shown(&w), ["Bitcoin (BTC)", "Bitcoin Cash (BCH)"]);
}

#[test]
fn upper_case_symbol_query_finds_ethereum() {
    let mut w = widget();
    w.handle_query_change("ETH");
    assert_eq!(shown(&w), ["Ethereum (ETH)"]);
    assert_eq!(w.results()[0].detail(), "ETH • CRYPTO");
}

#[test]
fn empty_query_after_results_clears_list() {
    let mut w = widget();
    w.handle_query_change("bit");
    assert!(w.is_visible());
    w.handle_query_change("");
    assert!(w.results().is_empty());
}

#[test]
fn activating_apple_targets_stock_tracker() {
    let mut w = widget();
    w.handle_query_change("Apple");
    let index = w
        .results()
        .iter()
        .position(|a| a.label() == "Apple")
        .unwrap();
    let dest = w.activate(index).unwrap();
    assert_eq!(dest.path(), "/tracker?type=stocks&asset=AAPL");
}

#[test]
fn every_result_contains_query_and_respects_cap() {
    let catalog = Arc::new(Catalog::builtin());
    let mut w = SearchWidget::new(catalog.clone());
    let queries = ["a", "A", "o", "in", "co", "SOL", "x", "zzz", "e", " ", "\t", "oin"];

    for q in queries {
        w.handle_query_change(q);
        assert!(w.results().len() <= 8, "too many results for {:?}", q);

        if q.trim().is_empty() {
            assert!(w.results().is_empty());
            continue;
        }
        let needle = q.to_lowercase();
        for asset in w.results() {
            assert!(
                asset.label().to_lowercase().contains(&needle)
                    || asset.symbol().to_lowercase().contains(&needle),
                "{} does not contain {:?}",
                asset.label(),
                q
            );
        }

        // Stable filter: same relative order as the catalog
        let expected: Vec<&str> = catalog
            .iter()
            .filter(|a| {
                a.label().to_lowercase().contains(&needle)
                    || a.symbol().to_lowercase().contains(&needle)
            })
            .take(8)
            .map(|a| a.symbol())
            .collect();
        let got: Vec<&str> = w.results().iter().map(|a| a.symbol()).collect();
        assert_eq!(got, expected);
    }
}

#[test]
fn outside_press_clears_and_inside_press_does_not() {
    let mut w = widget();
    w.handle_query_change("o");
    let before = w.results().len();
    assert!(before > 0);

    w.handle_outside_interaction(PointerTarget::Inside);
    assert_eq!(w.results().len(), before);

    w.handle_outside_interaction(PointerTarget::Outside);
    assert!(!w.is_visible());

    // Refocus with the same text re-shows the same matches
    let query = w.query().to_string();
    w.handle_query_change(&query);
    assert_eq!(w.results().len(), before);
}

#[test]
fn crypto_links_use_name_slugs() {
    let mut w = widget();
    w.handle_query_change("bitcoin cash");
    let dest = w.activate(0).unwrap();
    assert_eq!(dest.category, AssetCategory::Crypto);
    assert_eq!(dest.path(), "/tracker?type=crypto&asset=bitcoin-cash");
}
