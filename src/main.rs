use gamedump::config::cli::Commands;
use gamedump::config::Config;
use gamedump::domain::Storage;
use gamedump::error::Result;
use gamedump::infrastructure::FileSystemStore;
use gamedump::services::{GameService, ImageService, MergingService};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store: Arc<dyn Storage> = Arc::new(FileSystemStore::new(&config.args.out_dir));

    match config.args.command.clone() {
        None => {
            GameService::from_config(&config, store)?.process().await?;
        }
        Some(Commands::Merge { output }) => {
            MergingService::new(store).merge_into(&output)?;
        }
        Some(Commands::Images {
            catalog,
            images_dir,
            concurrency,
        }) => {
            ImageService::new(config.http_client.clone(), store)
                .download_all(&catalog, &images_dir, concurrency)
                .await?;
        }
    }

    info!("Done!");
    Ok(())
}
