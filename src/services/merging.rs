use crate::domain::storage::Storage;
use crate::domain::{CatalogEntry, GameRecord};
use crate::error::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub struct MergingService {
    store: Arc<dyn Storage>,
}

impl MergingService {
    pub fn new(store: Arc<dyn Storage + 'static>) -> Self {
        Self { store }
    }

    /// Collects every saved game into one catalog file, ordered by id.
    pub fn merge_into(&self, output: &Path) -> Result<usize> {
        let games = self.store.load_games()?;
        info!("Found {} game files.", games.len());

        let entries = merge_games(games);
        self.store.save_catalog(output, &entries)?;

        info!("Merged {} games into {}", entries.len(), output.display());
        Ok(entries.len())
    }
}

pub fn merge_games(mut games: Vec<GameRecord>) -> Vec<CatalogEntry> {
    // Non-numeric ids sort after numeric ones.
    games.sort_by(|a, b| match (a.numeric_id(), b.numeric_id()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    });

    games.into_iter().map(CatalogEntry::from).collect()
}
