mod fetch;
mod stats;

pub use fetch::run_fetch;
pub use stats::run_stats;

use anyhow::{Context, Result};
use catgrab_core::record::ProductRecord;
use catgrab_core::{extract, fetch as page_fetch, stats as price_stats};

/// Fetch the listing page (fatal on failure) and extract its records.
pub(crate) async fn fetch_and_extract(url: &str) -> Result<Vec<ProductRecord>> {
    let page = tokio::task::spawn_blocking({
        let url = url.to_string();
        move || page_fetch::fetch_page(&url)
    })
    .await
    .context("page fetch task join")?
    .context("listing page fetch failed")?;

    extract::extract_products(&page, url)
}

/// Print the three-line statistics report for the record sequence.
pub(crate) fn print_stats(products: &[ProductRecord]) -> Result<()> {
    println!("{}", price_stats::cheapest_line(products)?);
    println!("{}", price_stats::most_expensive_line(products)?);
    println!("{}", price_stats::average_price(products)?);
    Ok(())
}
