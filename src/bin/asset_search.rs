//! Headless catalog search: same matching as the GUI, printed as a table or JSON.
#[cfg(not(target_arch = "wasm32"))]
use {
    anyhow::{Context, Result},
    assetarc::{Asset, Catalog, config::SEARCH},
    clap::Parser,
    serde::Serialize,
    std::path::PathBuf,
    tabled::{Table, Tabled, settings::Style},
};

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(author, version, about = "Search the asset catalog by name or ticker", long_about = None)]
struct Args {
    /// Text to look for (case-insensitive, anywhere in the name or ticker)
    query: String,

    /// JSON catalog to search instead of the built-in asset list
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Maximum number of results
    #[arg(long, default_value_t = SEARCH.max_results)]
    limit: usize,

    /// Prefix links with this origin, e.g. http://127.0.0.1:5000
    #[arg(long)]
    base_url: Option<String>,

    /// Print JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Tabled, Serialize)]
struct ResultRow {
    #[tabled(rename = "Name")]
    label: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Type")]
    category: String,
    #[tabled(rename = "Link")]
    link: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl ResultRow {
    fn new(asset: &Asset, base_url: Option<&str>) -> Self {
        Self {
            label: asset.label().to_string(),
            symbol: asset.symbol().to_string(),
            category: asset.category().label(),
            link: asset.destination().url(base_url),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    let rows: Vec<ResultRow> = catalog
        .search(&args.query, args.limit)
        .into_iter()
        .map(|asset| ResultRow::new(asset, args.base_url.as_deref()))
        .collect();

    log::info!("{} match(es) for {:?}", rows.len(), args.query);

    if args.json {
        let out = serde_json::to_string_pretty(&rows).context("Failed to encode results")?;
        println!("{}", out);
    } else if rows.is_empty() {
        println!("No assets match {:?}", args.query);
    } else {
        println!("{}", Table::new(&rows).with(Style::rounded()));
    }
    Ok(())
}
