use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    /// Whole-request timeout. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(mut self, base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        self
    }
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    from_vars(
        std::env::var("RECOMMENDER_URL").ok(),
        std::env::var("RECOMMENDER_TIMEOUT_SECS").ok(),
    )
}

fn from_vars(base_url: Option<String>, timeout_secs: Option<String>) -> Result<Config> {
    let base_url = base_url
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let timeout = match timeout_secs {
        Some(raw) if !raw.trim().is_empty() => {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("RECOMMENDER_TIMEOUT_SECS is not a number: '{raw}'"))?;
            Some(Duration::from_secs(secs))
        }
        _ => None,
    };

    Ok(Config { base_url, timeout })
}
