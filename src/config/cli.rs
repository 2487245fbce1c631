use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Directory that receives one JSON file per game
    #[arg(long, default_value = "games")]
    pub out_dir: PathBuf,

    /// Site origin, used for the listing endpoint and for every game URL
    #[arg(long, default_value = "https://www.4j.com")]
    pub base_url: String,

    /// Number of games requested from the listing endpoint
    #[arg(long, default_value_t = 120_000)]
    pub page_size: u32,

    /// Listing category filter
    #[arg(long, default_value = "hot")]
    pub category: String,

    /// Strategy used to pull games out of the listing markup
    #[arg(long, value_enum, default_value_t = ExtractorKind::Regex)]
    pub extractor: ExtractorKind,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Merge the per-game files into a single catalog
    Merge {
        /// Catalog file to write
        #[arg(long, default_value = "games.json")]
        output: PathBuf,
    },
    /// Download the thumbnail of every game in a merged catalog
    Images {
        /// Catalog produced by `merge`
        #[arg(long, default_value = "games.json")]
        catalog: PathBuf,

        /// Directory that receives the images
        #[arg(long, default_value = "images")]
        images_dir: PathBuf,

        /// Maximum number of downloads in flight
        #[arg(long, default_value_t = 50)]
        concurrency: usize,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    Regex,
    Dom,
}
