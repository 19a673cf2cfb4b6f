use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::dexscreener::Config as DexScreenerConfig;
use crate::entity::SeedPolicy;

pub const DEFAULT_HEALTH_PORT: u16 = 10000;

/// Application configuration, read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Telegram bot token
    pub bot_token: String,

    /// DEXScreener client settings
    pub dexscreener: DexScreenerConfig,

    /// Directory holding the tier images, the start image and GIFs
    pub assets_dir: PathBuf,

    /// Whether a re-scan keeps or zeroes existing votes
    pub seed_policy: SeedPolicy,

    /// Port of the `/healthz` endpoint
    pub health_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .or_else(|_| env::var("BOT_TOKEN"))
            .context("TELEGRAM_BOT_TOKEN must be set in environment variables")?;

        let seed_policy = match env::var("VOTE_SEED_POLICY") {
            Ok(value) => value
                .parse::<SeedPolicy>()
                .context("VOTE_SEED_POLICY must be either 'preserve' or 'reset'")?,
            Err(_) => SeedPolicy::default(),
        };

        let health_port = match env::var("HEALTH_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("HEALTH_PORT is not a valid port: {}", value))?,
            Err(_) => DEFAULT_HEALTH_PORT,
        };

        Ok(Self {
            bot_token,
            dexscreener: DexScreenerConfig::from_env(),
            assets_dir: env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            seed_policy,
            health_port,
        })
    }
}
