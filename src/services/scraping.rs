use crate::domain::ScrapedGame;
use crate::error::Result;
use crate::infrastructure::{CatalogClient, ListingExtractor, ListingQuery};
use tracing::{info, warn};

pub struct ScrapingService {
    client: CatalogClient,
    extractor: Box<dyn ListingExtractor>,
}

impl ScrapingService {
    pub fn new(client: CatalogClient, extractor: Box<dyn ListingExtractor>) -> Self {
        info!("Created new Scraping service");
        Self { client, extractor }
    }

    /// Fetches the listing once and extracts every well-formed game from it.
    /// Only the fetch can fail; an empty result is logged but still returned.
    pub async fn scrape(&self, query: &ListingQuery) -> Result<Vec<ScrapedGame>> {
        let html = self.client.fetch_listing(query).await?;
        let games = self.extractor.extract_games(&html);

        info!("Found {} games.", games.len());
        if games.is_empty() {
            warn!("Listing contained no recognizable games");
        }

        Ok(games)
    }
}
