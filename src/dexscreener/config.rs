use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.dexscreener.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// DEXScreener client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the DEXScreener API
    pub api_url: String,

    /// Upper bound for a single search request
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Builds the configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        use std::env;

        let timeout_secs = env::var("DEXSCREENER_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_url: env::var("DEXSCREENER_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/latest/dex/search", self.api_url)
    }
}
