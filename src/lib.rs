// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod search;
pub mod ui;

// Re-export commonly used types outside of crate (for the binaries)
pub use app::App;
pub use domain::{Asset, AssetCategory, Catalog, Destination};
pub use search::{PointerTarget, SearchWidget};

use {
    anyhow::Result,
    clap::Parser,
    config::SEARCH,
    std::{path::PathBuf, sync::Arc},
};

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON catalog to search instead of the built-in asset list
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Origin of the tracker site that result links open on (native builds only)
    #[arg(long, default_value = SEARCH.native_tracker_base_url)]
    pub tracker_base_url: String,

    /// Maximum number of results shown under the search box
    #[arg(long, default_value_t = SEARCH.max_results)]
    pub max_results: usize,

    /// Pre-fill the search box
    #[arg(long)]
    pub query: Option<String>,
}

impl Cli {
    /// Web builds have no file system and always use the built-in list.
    pub fn load_catalog(&self) -> Result<Catalog> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = &self.catalog {
            return Catalog::load(path);
        }
        Ok(Catalog::builtin())
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli, catalog: Arc<Catalog>) -> App {
    App::new(cc, args, catalog)
}
