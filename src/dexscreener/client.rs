use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;

use crate::dexscreener::models::{DexPair, SearchResponse};
use crate::dexscreener::Config;

/// Source of market data for `/scan`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketClient: Send + Sync {
    /// Candidate pairs for a free-text query (usually a mint address), best match first
    async fn search_pairs(&self, query: &str) -> Result<Vec<DexPair>>;
}

/// `MarketClient` backed by the public DEXScreener search endpoint
pub struct DexScreenerClient {
    http_client: Client,
    config: Config,
}

impl DexScreenerClient {
    pub fn new(config: Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build DEXScreener HTTP client")?;

        Ok(Self {
            http_client,
            config,
        })
    }
}

#[async_trait]
impl MarketClient for DexScreenerClient {
    async fn search_pairs(&self, query: &str) -> Result<Vec<DexPair>> {
        info!("Searching DEXScreener pairs for: {}", query);

        let response = self
            .http_client
            .get(self.config.search_url())
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| {
                error!("DEXScreener request failed: {}", e);
                if e.is_timeout() {
                    anyhow!("DEXScreener request timed out after {:?}", self.config.timeout)
                } else {
                    anyhow!("HTTP request failed: {}", e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("DEXScreener API error [{}]: {}", status, error_text);
            return Err(anyhow!("DEXScreener API error {}: {}", status, error_text));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            error!("Failed to parse DEXScreener response: {}", e);
            anyhow!("Failed to parse DEXScreener response: {}", e)
        })?;

        Ok(body.pairs.unwrap_or_default())
    }
}
