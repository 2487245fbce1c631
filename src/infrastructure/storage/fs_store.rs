use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::{CatalogEntry, GameRecord};
use crate::error::{GameError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct FileSystemStore {
    games_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(games_dir: impl Into<PathBuf>) -> Self {
        Self {
            games_dir: games_dir.into(),
        }
    }

    pub fn games_dir(&self) -> &Path {
        &self.games_dir
    }

    fn get_path_for_key(&self, key: &str) -> PathBuf {
        self.games_dir.join(format!("{}.{}", key, StorageKeys::GAME_EXTENSION))
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(data)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }
}

impl Storage for FileSystemStore {
    fn ensure_games_dir(&self) -> Result<bool> {
        if self.games_dir.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&self.games_dir)?;
        info!("Created directory: {}", self.games_dir.display());
        Ok(true)
    }

    fn save_game(&self, game: &GameRecord) -> Result<PathBuf> {
        GameRecord::check_id(&game.id)?;
        let path = self.get_path_for_key(&game.id);
        self.write_json_file(&path, game)?;
        Ok(path)
    }

    fn load_game(&self, id: &str) -> Result<Option<GameRecord>> {
        GameRecord::check_id(id)?;
        self.read_json_file(&self.get_path_for_key(id))
    }

    fn load_games(&self) -> Result<Vec<GameRecord>> {
        if !self.games_dir.is_dir() {
            return Err(GameError::NotFound(self.games_dir.clone()));
        }

        let mut games = Vec::new();
        for entry in fs::read_dir(&self.games_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(StorageKeys::GAME_EXTENSION) {
                continue;
            }

            match self.read_json_file::<GameRecord>(&path) {
                Ok(Some(game)) => games.push(game),
                Ok(None) => debug!("{} vanished while reading", path.display()),
                Err(e) => warn!("Failed to parse {}: {}", path.display(), e),
            }
        }

        Ok(games)
    }

    fn save_catalog(&self, path: &Path, entries: &[CatalogEntry]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        self.write_json_file(path, entries)
    }

    fn load_catalog(&self, path: &Path) -> Result<Vec<CatalogEntry>> {
        self.read_json_file(path)?
            .ok_or_else(|| GameError::NotFound(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            name: name.to_string(),
            url: format!("https://www.4j.com/{}", name.replace(' ', "-")),
            image: "https://example.com/thumb.jpg".to_string(),
            rating: "4.5".to_string(),
        }
    }

    #[test]
    fn creates_missing_nested_directory_once() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(tmp.path().join("out").join("games"));

        assert!(store.ensure_games_dir().unwrap());
        assert!(!store.ensure_games_dir().unwrap());
        assert!(store.games_dir().is_dir());
    }

    #[test]
    fn existing_directory_keeps_unrelated_files() {
        let tmp = tempfile::tempdir().unwrap();
        let unrelated = tmp.path().join("notes.txt");
        fs::write(&unrelated, "keep me").unwrap();

        let store = FileSystemStore::new(tmp.path());
        assert!(!store.ensure_games_dir().unwrap());
        assert_eq!(fs::read_to_string(unrelated).unwrap(), "keep me");
    }

    #[test]
    fn saved_game_reads_back_equal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(tmp.path());
        let game = record("22508", "Magic Piano Online");

        let path = store.save_game(&game).unwrap();
        assert_eq!(path, tmp.path().join("22508.json"));
        assert_eq!(store.load_game("22508").unwrap(), Some(game));
        assert_eq!(store.load_game("1").unwrap(), None);
    }

    #[test]
    fn save_overwrites_previous_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(tmp.path());

        store.save_game(&record("7", "A Much Longer First Name")).unwrap();
        store.save_game(&record("7", "Short")).unwrap();

        let loaded = store.load_game("7").unwrap().unwrap();
        assert_eq!(loaded.name, "Short");
    }

    #[test]
    fn refuses_ids_outside_games_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let games_dir = tmp.path().join("games");
        let store = FileSystemStore::new(&games_dir);
        store.ensure_games_dir().unwrap();

        let result = store.save_game(&record("../escaped", "Escaped"));

        assert!(matches!(result, Err(GameError::InvalidRecord(_))));
        assert!(!tmp.path().join("escaped.json").exists());
        assert!(matches!(
            store.load_game("../escaped"),
            Err(GameError::InvalidRecord(_))
        ));
    }

    #[test]
    fn load_games_skips_foreign_and_broken_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(tmp.path());
        store.save_game(&record("1", "One")).unwrap();
        fs::write(tmp.path().join("2.json"), "{ not json").unwrap();
        fs::write(tmp.path().join("readme.md"), "# games").unwrap();

        let games = store.load_games().unwrap();
        assert_eq!(games, vec![record("1", "One")]);
    }

    #[test]
    fn load_games_requires_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(tmp.path().join("missing"));
        assert!(matches!(store.load_games(), Err(GameError::NotFound(_))));
    }
}
