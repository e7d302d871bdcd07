//! CLI for the catgrab catalog scraper.

mod commands;

use anyhow::Result;
use catgrab_core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_fetch, run_stats};

/// Top-level CLI for the catgrab catalog scraper.
#[derive(Debug, Parser)]
#[command(name = "catgrab")]
#[command(
    about = "catgrab: catalog price statistics and concurrent image fetcher",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a listing page, download its product images, and print price statistics.
    Fetch {
        /// Listing page URL (a catalog page with `ul.catalog` markup).
        url: String,

        /// Download with N concurrent workers (overrides the config value).
        #[arg(long, value_name = "N")]
        workers: Option<usize>,

        /// Directory for downloaded images (overrides the config value).
        #[arg(long, value_name = "DIR")]
        images_dir: Option<PathBuf>,
    },

    /// Print price statistics for a listing page without downloading images.
    Stats {
        /// Listing page URL.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                url,
                workers,
                images_dir,
            } => run_fetch(&cfg, &url, workers, images_dir).await?,
            CliCommand::Stats { url } => run_stats(&url).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
