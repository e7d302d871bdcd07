//! `catgrab stats` – price statistics only, no downloads.

use anyhow::Result;

use super::{fetch_and_extract, print_stats};

pub async fn run_stats(url: &str) -> Result<()> {
    let products = fetch_and_extract(url).await?;
    tracing::info!("extracted {} product(s) from {}", products.len(), url);
    print_stats(&products)
}
