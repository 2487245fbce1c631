use crate::config::{Config, LISTING_START};
use crate::domain::storage::Storage;
use crate::error::Result;
use crate::infrastructure::{extractor_for, CatalogClient, ListingQuery};
use crate::services::{
    export::{ExportReport, ExportService},
    scraping::ScrapingService,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

pub struct GameService {
    store: Arc<dyn Storage>,
    scraping: ScrapingService,
    export: ExportService,
    query: ListingQuery,
    games_dir: PathBuf,
}

impl GameService {
    pub fn new(
        store: Arc<dyn Storage + 'static>,
        scraping: ScrapingService,
        export: ExportService,
        query: ListingQuery,
        games_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            scraping,
            export,
            query,
            games_dir: games_dir.into(),
        }
    }

    /// Wires the pipeline from command-line configuration.
    pub fn from_config(config: &Config, store: Arc<dyn Storage + 'static>) -> Result<Self> {
        let client = CatalogClient::new(config.http_client.clone(), config.listing_url());
        let scraping = ScrapingService::new(client, extractor_for(config.args.extractor)?);
        let export = ExportService::new(store.clone(), config.origin());
        let query = ListingQuery {
            from: LISTING_START,
            num: config.args.page_size,
            category: config.args.category.clone(),
        };

        Ok(Self::new(
            store,
            scraping,
            export,
            query,
            config.args.out_dir.clone(),
        ))
    }

    /// Runs directory setup, fetch, extraction and export once, in that order.
    /// Only setup and fetch errors are returned; write errors land in the report.
    pub async fn process(&self) -> Result<ExportReport> {
        info!("Starting game dump pipeline");

        self.store.ensure_games_dir()?;

        let games = self.scraping.scrape(&self.query).await?;
        let report = self.export.export(games);

        info!(
            "Successfully saved {} games to '{}/'.",
            report.saved,
            self.games_dir.display()
        );
        if !report.failures.is_empty() {
            warn!("{} games could not be saved", report.failed());
        }

        Ok(report)
    }
}
