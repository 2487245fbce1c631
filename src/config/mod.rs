use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use reqwest::Client;
use std::time::Duration;

pub mod cli;

/// Path of the listing endpoint relative to the site origin.
pub const LISTING_PATH: &str = "/ajax_loadmoregames.php";

/// Offset of the first game requested; the whole listing comes back in one page.
pub const LISTING_START: u32 = 0;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { args, http_client })
    }

    /// Site origin without a trailing slash.
    pub fn origin(&self) -> &str {
        self.args.base_url.trim_end_matches('/')
    }

    pub fn listing_url(&self) -> String {
        format!("{}{}", self.origin(), LISTING_PATH)
    }
}
