mod config;
mod error;
mod extractor;
mod fetcher;
mod reshape;
mod types;
mod writer;

use std::path::Path;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::Result;
use crate::extractor::extract_records;
use crate::fetcher::fetch_page;
use crate::reshape::{melt, odds_columns, pivot, relabel_props};
use crate::writer::write_csv;

#[tokio::main]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    let body = fetch_page(&cfg).await?;

    let records = extract_records(&body)?;
    info!("Extracted {} player records from {}", records.len(), cfg.props_url);

    let columns = odds_columns();
    let long_rows = melt(&records, &columns);
    let mut rows = pivot(long_rows);
    relabel_props(&mut rows);
    info!("Reshaped into {} (player, prop, side) rows", rows.len());

    write_csv(Path::new(&cfg.output_path), &rows)?;
    info!("Wrote odds table to {}", cfg.output_path);

    Ok(())
}
