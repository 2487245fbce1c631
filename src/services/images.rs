use crate::domain::storage::Storage;
use crate::domain::CatalogEntry;
use crate::error::Result;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, Url};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

const DEFAULT_EXTENSION: &str = "jpg";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImageReport {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

enum Outcome {
    Downloaded,
    Skipped,
    Failed,
}

pub struct ImageService {
    client: Client,
    store: Arc<dyn Storage>,
}

impl ImageService {
    pub fn new(client: Client, store: Arc<dyn Storage + 'static>) -> Self {
        Self { client, store }
    }

    /// Downloads the thumbnail of every catalog entry into `images_dir`,
    /// keeping at most `concurrency` requests in flight. Files that already
    /// exist are left alone; failed downloads are logged and counted.
    pub async fn download_all(
        &self,
        catalog: &Path,
        images_dir: &Path,
        concurrency: usize,
    ) -> Result<ImageReport> {
        info!("Reading games from {:?}", catalog);
        let entries = self.store.load_catalog(catalog)?;
        tokio::fs::create_dir_all(images_dir).await?;
        info!(
            "Found {} games. Starting download to {:?}...",
            entries.len(),
            images_dir
        );

        let pb = ProgressBar::new(entries.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?,
        );

        let outcomes: Vec<Outcome> = stream::iter(entries.iter())
            .map(|entry| {
                let pb = pb.clone();
                async move {
                    let outcome = self.download_entry(entry, images_dir).await;
                    pb.inc(1);
                    outcome
                }
            })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await;

        pb.finish_with_message("Download complete!");

        let mut report = ImageReport::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Downloaded => report.downloaded += 1,
                Outcome::Skipped => report.skipped += 1,
                Outcome::Failed => report.failed += 1,
            }
        }

        info!(
            "Downloaded {} images, skipped {}, failed {}",
            report.downloaded, report.skipped, report.failed
        );
        Ok(report)
    }

    async fn download_entry(&self, entry: &CatalogEntry, images_dir: &Path) -> Outcome {
        let path = image_path(entry, images_dir);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Outcome::Skipped;
        }

        match self.download_image(&entry.game.image, &path).await {
            Ok(()) => Outcome::Downloaded,
            Err(e) => {
                warn!("Error downloading {}: {}", entry.slug, e);
                Outcome::Failed
            }
        }
    }

    /// Writes to a `.part` sibling and renames it into place, so `path` only
    /// ever exists with complete contents.
    async fn download_image(&self, url: &str, path: &Path) -> Result<()> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        let partial = partial_path(path);
        let written: std::io::Result<()> = async {
            let mut file = tokio::fs::File::create(&partial).await?;
            file.write_all(&bytes).await?;
            file.sync_all().await?;
            tokio::fs::rename(&partial, path).await
        }
        .await;

        if let Err(e) = written {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(e.into());
        }

        Ok(())
    }
}

fn image_path(entry: &CatalogEntry, images_dir: &Path) -> PathBuf {
    images_dir.join(format!("{}.{}", entry.slug, image_extension(&entry.game.image)))
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

fn image_extension(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|url| {
            Path::new(url.path())
                .extension()
                .and_then(|ext| ext.to_str())
                .map(str::to_string)
        })
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}
