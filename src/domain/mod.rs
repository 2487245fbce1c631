mod game;
pub(crate) mod storage;

pub use game::{CatalogEntry, GameRecord, ScrapedGame};
pub use storage::Storage;
