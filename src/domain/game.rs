use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};

/// One game as it appears in the listing markup, before the URL is made absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedGame {
    pub id: String,
    pub url_suffix: String,
    pub image: String,
    pub name: String,
    pub rating: String,
}

/// The record persisted as `<id>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub name: String,
    pub url: String,
    pub image: String,
    pub rating: String,
}

impl GameRecord {
    pub fn from_scraped(origin: &str, scraped: ScrapedGame) -> Result<Self> {
        Self::check_id(&scraped.id)?;

        Ok(Self {
            url: format!("{}{}", origin, scraped.url_suffix),
            id: scraped.id,
            name: scraped.name,
            image: scraped.image,
            rating: scraped.rating,
        })
    }

    /// Ids become file names, so only `[0-9A-Za-z_-]` is allowed.
    pub fn check_id(id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(GameError::InvalidRecord("empty game id".to_string()));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(GameError::InvalidRecord(format!(
                "game id '{}' is not a valid file name",
                id
            )));
        }
        Ok(())
    }

    /// Numeric view of the id, used for ordering merged catalogs.
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.parse().ok()
    }

    /// File-name-safe slug taken from the URL path, falling back to the id.
    pub fn slug(&self) -> String {
        let path = reqwest::Url::parse(&self.url)
            .map(|url| url.path().trim_matches('/').to_string())
            .unwrap_or_default();

        if path.is_empty() {
            return self.id.clone();
        }

        path.chars()
            .map(|c| match c {
                c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => c,
                _ => '_',
            })
            .collect()
    }
}

/// Entry of the merged catalog: the record plus the slug used for pages and images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub game: GameRecord,
    pub slug: String,
}

impl From<GameRecord> for CatalogEntry {
    fn from(game: GameRecord) -> Self {
        let slug = game.slug();
        Self { game, slug }
    }
}
