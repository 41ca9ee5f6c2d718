use std::sync::LazyLock;

pub const ICON_SEARCH: &str = "🔍";
pub const ICON_LINK: &str = "🔗";

pub struct UiText {
    pub app_title: String,
    pub icon_search: String,
    pub icon_link: String,

    // --- Search bar ---
    pub search_hint: String,
    pub search_hover: String,

    // --- Central panel ---
    pub catalog_heading: String,
    pub label_tracker: String,
    pub label_last_opened: String,
    pub label_nothing_opened: String,
    pub label_this_site: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "AssetArc".to_string(),
    icon_search: ICON_SEARCH.to_string(),
    icon_link: ICON_LINK.to_string(),

    search_hint: "Search assets (e.g. BTC, Apple)".to_string(),
    search_hover: "Type a name or ticker. Click a result or press Enter on it to open its tracker."
        .to_string(),

    catalog_heading: "Catalog".to_string(),
    label_tracker: "Tracker".to_string(),
    label_last_opened: "Last opened".to_string(),
    label_nothing_opened: "nothing yet".to_string(),
    label_this_site: "(this site)".to_string(),
});
