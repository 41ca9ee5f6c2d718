pub struct SearchConfig {
    /// Hard cap on rendered results. No pagination.
    pub max_results: usize,
    /// Path of the external tracker page that result links point at.
    pub tracker_path: &'static str,
    /// Native builds have no page origin, so links are resolved against this.
    pub native_tracker_base_url: &'static str,

    // Layout
    pub input_width: f32,
    pub popup_width: f32,
    pub entry_padding: f32,
    pub label_font_size: f32,
    pub detail_font_size: f32,
}

pub const SEARCH: SearchConfig = SearchConfig {
    max_results: 8,
    tracker_path: "/tracker",
    native_tracker_base_url: "http://127.0.0.1:5000", // Flask dev server default

    input_width: 260.0,
    popup_width: 260.0,
    entry_padding: 6.0,
    label_font_size: 14.0,
    detail_font_size: 11.0,
};
