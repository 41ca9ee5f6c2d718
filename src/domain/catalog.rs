//! The fixed, ordered collection of searchable assets.
use {
    crate::domain::{Asset, AssetCategory, Destination, Query},
    anyhow::{Context, Result, anyhow},
    itertools::Itertools,
    serde::Deserialize,
};

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

const BUILTIN_CRYPTO: &[(&str, &str)] = &[
    ("Bitcoin", "BTC"),
    ("Ethereum", "ETH"),
    ("Bitcoin Cash", "BCH"),
    ("Solana", "SOL"),
    ("Cardano", "ADA"),
    ("XRP", "XRP"),
    ("Dogecoin", "DOGE"),
    ("Litecoin", "LTC"),
    ("Polkadot", "DOT"),
    ("Chainlink", "LINK"),
];

const BUILTIN_STOCKS: &[(&str, &str)] = &[
    ("Apple", "AAPL"),
    ("NVIDIA", "NVDA"),
    ("Microsoft", "MSFT"),
    ("Tesla", "TSLA"),
    ("Amazon", "AMZN"),
    ("Alphabet", "GOOGL"),
    ("Meta Platforms", "META"),
];

/// One entry of a catalog file. Field names follow the page script's asset literals.
#[derive(Deserialize)]
struct CatalogEntry {
    label: String,
    symbol: String,
    #[serde(rename = "type")]
    category: AssetCategory,
    #[serde(default)]
    href: Option<String>,
}

impl CatalogEntry {
    fn into_asset(self) -> Result<Asset> {
        let asset = match self.href {
            Some(href) => {
                let destination = Destination::parse(&href)
                    .ok_or_else(|| anyhow!("'{}' is not a tracker link", href))?;
                Asset::with_destination(self.label, self.symbol, self.category, destination)
            }
            None => Asset::new(self.label, self.symbol, self.category),
        };
        asset.validate()?;
        Ok(asset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    assets: Vec<Asset>,
}

impl Catalog {
    pub fn from_assets(assets: Vec<Asset>) -> Self {
        let duplicates: Vec<&str> = assets
            .iter()
            .map(|a| a.symbol())
            .duplicates()
            .collect();
        if !duplicates.is_empty() {
            log::warn!(
                "Catalog contains duplicate symbols {:?}; lookups by symbol return the first",
                duplicates
            );
        }
        Self { assets }
    }

    /// Crypto first, then stocks, each in listing order.
    pub fn builtin() -> Self {
        let crypto = BUILTIN_CRYPTO
            .iter()
            .map(|&(label, symbol)| Asset::new(label, symbol, AssetCategory::Crypto));
        let stocks = BUILTIN_STOCKS
            .iter()
            .map(|&(label, symbol)| Asset::new(label, symbol, AssetCategory::Stocks));
        Self::from_assets(crypto.chain(stocks).collect())
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(text).context("Catalog is not a JSON array of assets")?;
        let assets = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| entry.into_asset().with_context(|| format!("Catalog entry #{}", i)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_assets(assets))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog =
            Self::from_json(&text).with_context(|| format!("Invalid catalog {}", path.display()))?;
        log::info!("Loaded {} assets from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Stable filter in catalog order, capped at `limit`. Blank queries match nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Asset> {
        let Some(query) = Query::new(query) else {
            return Vec::new();
        };
        self.assets
            .iter()
            .filter(|asset| asset.matches(&query))
            .take(limit)
            .collect()
    }

    pub fn find_by_symbol(&self, symbol: &str) -> Option<&Asset> {
        self.assets
            .iter()
            .find(|a| a.symbol().eq_ignore_ascii_case(symbol))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    pub fn count_by_category(&self, category: AssetCategory) -> usize {
        self.assets.iter().filter(|a| a.category() == category).count()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(found: &[&Asset]) -> Vec<String> {
        found.iter().map(|a| a.label().to_string()).collect()
    }

    #[test]
    fn bit_finds_both_bitcoins_in_order() {
        let catalog = Catalog::builtin();
        assert_eq!(labels(&catalog.search("bit", 8)), ["Bitcoin", "Bitcoin Cash"]);
    }

    #[test]
    fn eth_matches_symbol_only_once() {
        let catalog = Catalog::builtin();
        let found = catalog.search("ETH", 8);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].symbol(), "ETH");
    }

    #[test]
    fn blank_query_finds_nothing() {
        let catalog = Catalog::builtin();
        assert!(catalog.search("", 8).is_empty());
        assert!(catalog.search("   ", 8).is_empty());
    }

    #[test]
    fn results_are_capped_and_keep_catalog_order() {
        let catalog = Catalog::builtin();
        // "a" hits most of the list
        let found = catalog.search("a", 8);
        assert_eq!(found.len(), 8);

        let positions: Vec<usize> = found
            .iter()
            .map(|f| catalog.iter().position(|a| a == *f).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn builtin_symbols_are_unique() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.iter().map(|a| a.symbol()).unique().count(), catalog.len());
        assert_eq!(
            catalog.count_by_category(AssetCategory::Crypto) + catalog.count_by_category(AssetCategory::Stocks),
            catalog.len()
        );
    }

    #[test]
    fn json_catalog_with_and_without_href() {
        let catalog = Catalog::from_json(
            r#"[
                {"label": "Bitcoin", "href": "/tracker?type=crypto&asset=bitcoin", "symbol": "BTC", "type": "crypto"},
                {"label": "Apple", "symbol": "AAPL", "type": "stocks"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let apple = catalog.find_by_symbol("aapl").unwrap();
        assert_eq!(apple.destination().path(), "/tracker?type=stocks&asset=AAPL");
    }

    #[test]
    fn json_catalog_rejects_bad_entries() {
        assert!(Catalog::from_json("{}").is_err());
        assert!(Catalog::from_json(r#"[{"label": "X", "symbol": "X", "type": "bonds"}]"#).is_err());
        assert!(Catalog::from_json(r#"[{"label": "", "symbol": "X", "type": "stocks"}]"#).is_err());
        assert!(
            Catalog::from_json(r#"[{"label": "X", "symbol": "X", "type": "stocks", "href": "/elsewhere"}]"#)
                .is_err()
        );
    }

    #[test]
    fn duplicate_symbols_are_kept() {
        let catalog = Catalog::from_assets(vec![
            Asset::new("Alpha", "DUP", AssetCategory::Stocks),
            Asset::new("Beta", "DUP", AssetCategory::Stocks),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_by_symbol("DUP").unwrap().label(), "Alpha");
    }
}
