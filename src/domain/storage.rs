use super::{CatalogEntry, GameRecord};
use crate::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    /// Creates the games directory and any missing parent. Returns `true` when
    /// the directory did not exist before.
    fn ensure_games_dir(&self) -> Result<bool>;
    /// Writes `<id>.json`, replacing any earlier file for the same id.
    fn save_game(&self, game: &GameRecord) -> Result<PathBuf>;
    fn load_game(&self, id: &str) -> Result<Option<GameRecord>>;
    /// Every record in the games directory; unreadable files are skipped.
    fn load_games(&self) -> Result<Vec<GameRecord>>;
    fn save_catalog(&self, path: &Path, entries: &[CatalogEntry]) -> Result<()>;
    fn load_catalog(&self, path: &Path) -> Result<Vec<CatalogEntry>>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const GAME_EXTENSION: &'static str = "json";
}
