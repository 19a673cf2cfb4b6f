use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::dexscreener::{DexScreenerClient, MarketClient};
use crate::entity::SeedPolicy;
use crate::services::{AssetProvider, FsAssetProvider, RandomSource, ThreadRandom, VoteStore};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // External collaborators
    market_client: Arc<dyn MarketClient + Send + Sync>,
    assets: Arc<dyn AssetProvider + Send + Sync>,
    random: Arc<dyn RandomSource + Send + Sync>,

    // Process-wide state
    vote_store: Arc<Mutex<VoteStore>>,
}

impl ServiceContainer {
    /// Create a container from explicit collaborators
    pub fn new(
        market_client: Arc<dyn MarketClient + Send + Sync>,
        assets: Arc<dyn AssetProvider + Send + Sync>,
        random: Arc<dyn RandomSource + Send + Sync>,
        seed_policy: SeedPolicy,
    ) -> Self {
        Self {
            market_client,
            assets,
            random,
            vote_store: Arc::new(Mutex::new(VoteStore::new(seed_policy))),
        }
    }

    /// Create a container wired to DEXScreener and the on-disk asset directory
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let market_client = Arc::new(DexScreenerClient::new(config.dexscreener.clone())?)
            as Arc<dyn MarketClient + Send + Sync>;

        let assets = Arc::new(FsAssetProvider::new(config.assets_dir.clone()))
            as Arc<dyn AssetProvider + Send + Sync>;

        Ok(Self::new(
            market_client,
            assets,
            Arc::new(ThreadRandom),
            config.seed_policy,
        ))
    }

    // Accessor methods

    pub fn market_client(&self) -> Arc<dyn MarketClient + Send + Sync> {
        self.market_client.clone()
    }

    pub fn assets(&self) -> Arc<dyn AssetProvider + Send + Sync> {
        self.assets.clone()
    }

    pub fn random(&self) -> Arc<dyn RandomSource + Send + Sync> {
        self.random.clone()
    }

    pub fn vote_store(&self) -> Arc<Mutex<VoteStore>> {
        self.vote_store.clone()
    }
}
