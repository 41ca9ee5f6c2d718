use {
    crate::config::SEARCH,
    anyhow::{Result, bail},
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AssetCategory {
    Crypto,
    Stocks,
}

impl AssetCategory {
    /// Upper-cased form shown next to the symbol in a result entry.
    pub fn label(&self) -> String {
        self.to_string().to_uppercase()
    }
}

/// Target of an activated result: the external tracker page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination {
    pub category: AssetCategory,
    pub identifier: String,
}

impl Destination {
    /// Crypto pages are keyed by a lowercase slug of the name, stock pages by ticker.
    pub fn for_asset(category: AssetCategory, symbol: &str, label: &str) -> Self {
        let identifier = match category {
            AssetCategory::Crypto => slugify(label),
            AssetCategory::Stocks => symbol.to_string(),
        };
        Self {
            category,
            identifier,
        }
    }

    /// Relative link, e.g. "/tracker?type=stocks&asset=AAPL"
    pub fn path(&self) -> String {
        format!(
            "{}?type={}&asset={}",
            SEARCH.tracker_path, self.category, self.identifier
        )
    }

    /// Joins an absolute base (native builds have no page to be relative to).
    pub fn url(&self, base: Option<&str>) -> String {
        match base {
            Some(base) if !base.is_empty() => {
                format!("{}{}", base.trim_end_matches('/'), self.path())
            }
            _ => self.path(),
        }
    }

    /// Inverse of `path()`. Only links pointing at the tracker page are accepted.
    pub fn parse(href: &str) -> Option<Self> {
        let query = href.strip_prefix(SEARCH.tracker_path)?.strip_prefix('?')?;
        let mut category = None;
        let mut identifier = None;
        for pair in query.split('&') {
            match pair.split_once('=') {
                Some(("type", v)) => category = v.parse::<AssetCategory>().ok(),
                Some(("asset", v)) if !v.is_empty() => identifier = Some(v.to_string()),
                _ => {}
            }
        }
        Some(Self {
            category: category?,
            identifier: identifier?,
        })
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// A searchable catalog entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    label: String,
    symbol: String,
    category: AssetCategory,
    destination: Destination,
}

impl Asset {
    pub fn new(label: impl Into<String>, symbol: impl Into<String>, category: AssetCategory) -> Self {
        let label = label.into();
        let symbol = symbol.into();
        let destination = Destination::for_asset(category, &symbol, &label);
        Self {
            label,
            symbol,
            category,
            destination,
        }
    }

    pub fn with_destination(
        label: impl Into<String>,
        symbol: impl Into<String>,
        category: AssetCategory,
        destination: Destination,
    ) -> Self {
        Self {
            label: label.into(),
            symbol: symbol.into(),
            category,
            destination,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn category(&self) -> AssetCategory {
        self.category
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// "BTC • CRYPTO"
    pub fn detail(&self) -> String {
        format!("{} • {}", self.symbol, self.category.label())
    }

    pub fn matches(&self, query: &Query) -> bool {
        query.found_in(&self.label) || query.found_in(&self.symbol)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            bail!("asset with symbol '{}' has an empty label", self.symbol);
        }
        if self.symbol.trim().is_empty() {
            bail!("asset '{}' has an empty symbol", self.label);
        }
        Ok(())
    }
}

/// A lower-cased search needle. Empty when the raw text is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Option<Self> {
        // Blank input means "no search", but the needle itself keeps inner/outer spaces.
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_lowercase()))
        }
    }

    fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
