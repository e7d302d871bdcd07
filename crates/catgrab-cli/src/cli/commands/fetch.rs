//! `catgrab fetch` – full pipeline: extract, download images, report stats.

use anyhow::{Context, Result};
use catgrab_core::config::CatgrabConfig;
use catgrab_core::{dedup, pool, storage};
use std::path::PathBuf;

use super::{fetch_and_extract, print_stats};

pub async fn run_fetch(
    cfg: &CatgrabConfig,
    url: &str,
    workers: Option<usize>,
    images_dir: Option<PathBuf>,
) -> Result<()> {
    let products = fetch_and_extract(url).await?;
    tracing::info!("extracted {} product(s) from {}", products.len(), url);

    let images_dir = images_dir.unwrap_or_else(|| cfg.images_dir.clone());
    storage::ensure_dir(&images_dir)
        .with_context(|| format!("failed to create images dir: {}", images_dir.display()))?;

    let tasks = dedup::pending_tasks(&images_dir, &products);
    let skipped = products.len() - tasks.len();
    if skipped > 0 {
        tracing::info!("{} image(s) already present, skipped", skipped);
    }

    let workers = workers.unwrap_or(cfg.workers);
    let timeout = cfg.image_timeout();
    let report = tokio::task::spawn_blocking(move || pool::run_downloads(tasks, workers, timeout))
        .await
        .context("download pool task join")??;
    if !report.failed.is_empty() {
        tracing::warn!("{} download(s) failed; see log entries above", report.failed.len());
    }

    print_stats(&products)
}
