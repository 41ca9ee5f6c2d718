// Domain types and value objects
mod asset;
mod catalog;

pub use asset::{Asset, AssetCategory, Destination, Query};
pub use catalog::Catalog;
