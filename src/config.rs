use crate::error::{AppError, Result};

pub const PROPS_URL: &str = "https://www.rotowire.com/betting/nba/player-props.php";

/// Token identifying the `<script>` blocks that carry the props data blob.
pub const SCRIPT_MARKER: &str = "rwjs:ready";

pub const DEFAULT_OUTPUT_PATH: &str = "over_under_odds.csv";

/// HTTP timeout (seconds). A hanging fetch past this aborts the run.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub props_url: String,
    pub output_path: String,
    pub log_level: String,
    /// HTTP timeout in seconds (HTTP_TIMEOUT_SECS)
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            props_url: std::env::var("PROPS_URL").unwrap_or_else(|_| PROPS_URL.to_string()),
            output_path: std::env::var("OUTPUT_PATH")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| HTTP_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .map_err(|_| {
                    AppError::Config("HTTP_TIMEOUT_SECS must be a number of seconds".to_string())
                })?,
        })
    }
}
