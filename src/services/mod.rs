pub mod export;
pub mod game_service;
pub mod images;
pub mod merging;
pub mod scraping;

pub use export::{ExportReport, ExportService};
pub use game_service::GameService;
pub use images::{ImageReport, ImageService};
pub use merging::MergingService;
pub use scraping::ScrapingService;
