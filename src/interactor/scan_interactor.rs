use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::dexscreener::MarketClient;
use crate::entity::{BotError, TokenMetrics, ToxicityResult};
use crate::services::{compute_toxicity, VoteStore};

/// Outcome of a successful scan
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub mint: String,
    pub metrics: TokenMetrics,
    pub toxicity: ToxicityResult,
}

#[async_trait]
pub trait ScanInteractor: Send + Sync {
    async fn scan(&self, mint: &str) -> Result<ScanReport, BotError>;
}

pub struct ScanInteractorImpl {
    market_client: Arc<dyn MarketClient + Send + Sync>,
    vote_store: Arc<Mutex<VoteStore>>,
}

impl ScanInteractorImpl {
    pub fn new(
        market_client: Arc<dyn MarketClient + Send + Sync>,
        vote_store: Arc<Mutex<VoteStore>>,
    ) -> Self {
        Self {
            market_client,
            vote_store,
        }
    }
}

#[async_trait]
impl ScanInteractor for ScanInteractorImpl {
    async fn scan(&self, mint: &str) -> Result<ScanReport, BotError> {
        let pairs = self.market_client.search_pairs(mint).await.map_err(|e| {
            warn!("Scan of {} failed: {}", mint, e);
            BotError::from(e)
        })?;

        let pair = pairs.first().ok_or(BotError::NotFound)?;
        let metrics = TokenMetrics::from(pair);
        let toxicity = compute_toxicity(&metrics);

        info!(
            "Scanned {} ({}): toxicity {} [{}]",
            mint, metrics.symbol, toxicity.score, toxicity.tier
        );

        self.vote_store.lock().await.seed(mint);

        Ok(ScanReport {
            mint: mint.to_string(),
            metrics,
            toxicity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dexscreener::{DexPair, Liquidity, MockMarketClient};
    use crate::entity::{SeedPolicy, Tier};
    use anyhow::anyhow;

    fn store() -> Arc<Mutex<VoteStore>> {
        Arc::new(Mutex::new(VoteStore::new(SeedPolicy::Preserve)))
    }

    #[tokio::test]
    async fn successful_scan_scores_first_pair_and_seeds_votes() {
        let mut market = MockMarketClient::new();
        market.expect_search_pairs().times(1).returning(|_| {
            Ok(vec![
                DexPair {
                    liquidity: Some(Liquidity { usd: Some(800.0) }),
                    ..DexPair::default()
                },
                DexPair {
                    liquidity: Some(Liquidity { usd: Some(9_000_000.0) }),
                    ..DexPair::default()
                },
            ])
        });

        let votes = store();
        let interactor = ScanInteractorImpl::new(Arc::new(market), votes.clone());
        let report = interactor.scan("MintABC").await.unwrap();

        assert_eq!(report.mint, "MintABC");
        assert_eq!(report.metrics.liquidity_usd, 800.0);
        assert_eq!(report.toxicity.score, 40);
        assert_eq!(report.toxicity.tier, Tier::Suspicious);
        assert_eq!(votes.lock().await.most_recent(), Some("MintABC"));
    }

    #[tokio::test]
    async fn no_pairs_is_not_found_and_seeds_nothing() {
        let mut market = MockMarketClient::new();
        market.expect_search_pairs().returning(|_| Ok(Vec::new()));

        let votes = store();
        let interactor = ScanInteractorImpl::new(Arc::new(market), votes.clone());

        assert!(matches!(interactor.scan("Nope").await, Err(BotError::NotFound)));
        assert!(votes.lock().await.is_empty());
    }

    #[tokio::test]
    async fn client_failure_keeps_the_reason() {
        let mut market = MockMarketClient::new();
        market
            .expect_search_pairs()
            .returning(|_| Err(anyhow!("DEXScreener request timed out after 5s")));

        let votes = store();
        let interactor = ScanInteractorImpl::new(Arc::new(market), votes.clone());

        match interactor.scan("Slow").await {
            Err(BotError::Adapter(reason)) => {
                assert_eq!(reason, "DEXScreener request timed out after 5s")
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(votes.lock().await.is_empty());
    }
}
