use crate::domain::storage::Storage;
use crate::domain::{GameRecord, ScrapedGame};
use crate::error::{GameError, Result};
use std::sync::Arc;
use tracing::{debug, error};

/// Outcome of one export pass.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub found: usize,
    pub saved: usize,
    pub failures: Vec<(String, GameError)>,
}

impl ExportReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

pub struct ExportService {
    store: Arc<dyn Storage>,
    origin: String,
}

impl ExportService {
    pub fn new(store: Arc<dyn Storage + 'static>, origin: impl Into<String>) -> Self {
        Self {
            store,
            origin: origin.into(),
        }
    }

    /// Writes one file per game in order, so a repeated id ends up holding
    /// the last game seen. Per-game failures are collected, not returned.
    pub fn export(&self, games: Vec<ScrapedGame>) -> ExportReport {
        let mut report = ExportReport {
            found: games.len(),
            ..Default::default()
        };

        for scraped in games {
            let id = scraped.id.clone();
            match self.save(scraped) {
                Ok(()) => report.saved += 1,
                Err(e) => {
                    error!("Error saving game {}: {}", id, e);
                    report.failures.push((id, e));
                }
            }
        }

        report
    }

    fn save(&self, scraped: ScrapedGame) -> Result<()> {
        let record = GameRecord::from_scraped(&self.origin, scraped)?;
        let path = self.store.save_game(&record)?;
        debug!("Saved {} to {}", record.id, path.display());
        Ok(())
    }
}
