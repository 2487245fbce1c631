use crate::config::cli::ExtractorKind;
use crate::domain::ScrapedGame;
use crate::error::Result;

pub(crate) mod dom;
pub(crate) mod pattern;

pub use dom::DomExtractor;
pub use pattern::PatternExtractor;

/// Turns a listing page into the games it contains. Fragments that do not
/// have the expected shape are skipped, never reported as errors.
pub trait ListingExtractor: Send + Sync {
    fn extract_games(&self, html: &str) -> Vec<ScrapedGame>;
}

pub fn extractor_for(kind: ExtractorKind) -> Result<Box<dyn ListingExtractor>> {
    match kind {
        ExtractorKind::Regex => Ok(Box::new(PatternExtractor)),
        ExtractorKind::Dom => Ok(Box::new(DomExtractor::new()?)),
    }
}
