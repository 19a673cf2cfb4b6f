// src/dexscreener/mod.rs
pub mod client;
pub mod config;
pub mod models;

pub use client::{DexScreenerClient, MarketClient};
pub use config::Config;
pub use models::{BaseToken, DexPair, Liquidity, SearchResponse, Volume};

#[cfg(test)]
pub use client::MockMarketClient;
