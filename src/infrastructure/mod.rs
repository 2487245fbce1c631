mod clients;
mod scrapers;
mod storage;

pub use clients::catalog::{CatalogClient, ListingQuery};
pub use scrapers::{extractor_for, DomExtractor, ListingExtractor, PatternExtractor};
pub use storage::fs_store::FileSystemStore;
