//! Debugging feature flags.

pub struct LogFlags {
    /// Every recomputed query and how many results it produced.
    pub log_queries: bool,

    /// Outside/inside pointer decisions for dismissing the result list.
    pub log_pointer_targets: bool,

    /// Activated results and the URL handed to the browser.
    pub log_navigation: bool,

    /// Catalog contents at startup.
    pub log_catalog: bool,
}

pub const DF: LogFlags = LogFlags {
    log_navigation: true,
    log_catalog: true,

    log_queries: false,
    log_pointer_targets: false,
};
