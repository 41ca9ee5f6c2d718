use {
    crate::{
        config::{DF, SEARCH},
        domain::{Asset, Catalog, Destination},
    },
    std::sync::Arc,
};

/// Where a global pointer press landed relative to the widget's container region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
}

/// Search-as-you-type state, free of any UI toolkit.
/// Results are "visible" exactly when the result list is non-empty.
#[derive(Debug, Clone)]
pub struct SearchWidget {
    catalog: Arc<Catalog>,
    limit: usize,
    query: String,
    results: Vec<Asset>,
}

impl SearchWidget {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_limit(catalog, SEARCH.max_results)
    }

    pub fn with_limit(catalog: Arc<Catalog>, limit: usize) -> Self {
        Self {
            catalog,
            limit,
            query: String::new(),
            results: Vec::new(),
        }
    }

    /// Recompute matches for the current input text. Always replaces the previous list.
    pub fn handle_query_change(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.results.clear();
        self.results.extend(
            self.catalog
                .search(query, self.limit)
                .into_iter()
                .cloned(),
        );

        if DF.log_queries {
            log::info!("Query {:?} -> {} result(s)", query, self.results.len());
        }
    }

    /// A press anywhere outside the container hides the list. Presses inside change nothing.
    pub fn handle_outside_interaction(&mut self, target: PointerTarget) {
        if DF.log_pointer_targets {
            log::info!("Pointer press {:?} search region", target);
        }
        if target == PointerTarget::Outside {
            self.results.clear();
        }
    }

    /// Destination of the rendered entry at `index`, if there is one.
    pub fn activate(&self, index: usize) -> Option<&Destination> {
        let asset = self.results.get(index)?;
        if DF.log_navigation {
            log::debug!("Activated {} ({}) -> {}", asset.label(), asset.symbol(), asset.destination());
        }
        Some(asset.destination())
    }

    pub fn results(&self) -> &[Asset] {
        &self.results
    }

    pub fn is_visible(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::domain::AssetCategory};

    fn widget() -> SearchWidget {
        SearchWidget::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn blank_query_hides_results() {
        let mut w = widget();
        w.handle_query_change("bit");
        assert!(w.is_visible());

        w.handle_query_change("  ");
        assert!(!w.is_visible());
        assert_eq!(w.query(), "  ");
    }

    #[test]
    fn repeated_queries_do_not_accumulate() {
        let mut w = widget();
        w.handle_query_change("bit");
        w.handle_query_change("bit");
        assert_eq!(w.results().len(), 2);

        w.handle_query_change("nvd");
        assert_eq!(w.results().len(), 1);
        assert_eq!(w.results()[0].symbol(), "NVDA");
    }

    #[test]
    fn custom_limit_is_respected() {
        let mut w = SearchWidget::with_limit(Arc::new(Catalog::builtin()), 2);
        w.handle_query_change("a");
        assert_eq!(w.results().len(), 2);
        assert_eq!(w.limit(), 2);
    }

    #[test]
    fn outside_press_clears_inside_press_keeps() {
        let mut w = widget();
        w.handle_query_change("eth");

        w.handle_outside_interaction(PointerTarget::Inside);
        assert!(w.is_visible());

        w.handle_outside_interaction(PointerTarget::Outside);
        assert!(!w.is_visible());

        // Clearing an already empty list is fine
        w.handle_outside_interaction(PointerTarget::Outside);
        assert!(!w.is_visible());
    }

    #[test]
    fn activation_returns_destination_of_entry() {
        let mut w = widget();
        w.handle_query_change("apple");
        let dest = w.activate(0).unwrap();
        assert_eq!(dest.category, AssetCategory::Stocks);
        assert_eq!(dest.path(), "/tracker?type=stocks&asset=AAPL");

        assert!(w.activate(1).is_none());
    }

    #[test]
    fn substituted_catalog_is_searched() {
        let catalog = Catalog::from_assets(vec![crate::domain::Asset::new(
            "Gold Trust",
            "GLD",
            AssetCategory::Stocks,
        )]);
        let mut w = SearchWidget::new(Arc::new(catalog));
        w.handle_query_change("bit");
        assert!(!w.is_visible());
        w.handle_query_change("gold");
        assert_eq!(w.results()[0].symbol(), "GLD");
    }
}
