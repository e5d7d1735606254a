use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, Result};

/// Fetch the props page and return its body. Any non-success status is
/// fatal; the pipeline never runs on a partial or error page.
pub async fn fetch_page(cfg: &Config) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.http_timeout_secs))
        .build()?;

    let response = client.get(&cfg.props_url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Fetch(format!(
            "GET {} returned {status}",
            cfg.props_url
        )));
    }

    let body = response.text().await?;
    debug!("Fetched {} bytes from {}", body.len(), cfg.props_url);
    Ok(body)
}
