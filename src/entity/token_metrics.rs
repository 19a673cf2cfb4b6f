use serde::{Deserialize, Serialize};

use crate::dexscreener::DexPair;

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_SYMBOL: &str = "N/A";
pub const DEFAULT_PAIR_URL: &str = "https://dexscreener.com";

/// Market figures for one scanned token, taken from the first matching pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetrics {
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub liquidity_usd: f64,
    pub volume_24h_usd: f64,
    pub fdv_usd: f64,
    pub external_url: String,
}

impl Default for TokenMetrics {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            symbol: UNKNOWN_SYMBOL.to_string(),
            price_usd: 0.0,
            liquidity_usd: 0.0,
            volume_24h_usd: 0.0,
            fdv_usd: 0.0,
            external_url: DEFAULT_PAIR_URL.to_string(),
        }
    }
}

impl From<&DexPair> for TokenMetrics {
    fn from(pair: &DexPair) -> Self {
        let defaults = TokenMetrics::default();
        let base_token = pair.base_token.as_ref();

        Self {
            name: base_token
                .and_then(|token| token.name.clone())
                .unwrap_or(defaults.name),
            symbol: base_token
                .and_then(|token| token.symbol.clone())
                .unwrap_or(defaults.symbol),
            price_usd: pair.price_usd.unwrap_or_default(),
            liquidity_usd: pair
                .liquidity
                .as_ref()
                .and_then(|liquidity| liquidity.usd)
                .unwrap_or_default(),
            volume_24h_usd: pair
                .volume
                .as_ref()
                .and_then(|volume| volume.h24)
                .unwrap_or_default(),
            fdv_usd: pair.fdv.unwrap_or_default(),
            external_url: pair.url.clone().unwrap_or(defaults.external_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dexscreener::{BaseToken, Liquidity, Volume};

    #[test]
    fn empty_pair_falls_back_to_defaults() {
        let metrics = TokenMetrics::from(&DexPair::default());
        assert_eq!(metrics, TokenMetrics::default());
        assert_eq!(metrics.name, "Unknown");
        assert_eq!(metrics.symbol, "N/A");
        assert_eq!(metrics.external_url, "https://dexscreener.com");
    }

    #[test]
    fn populated_pair_is_copied_through() {
        let pair = DexPair {
            base_token: Some(BaseToken {
                name: Some("Bonk".to_string()),
                symbol: Some("BONK".to_string()),
            }),
            price_usd: Some(0.0000231),
            liquidity: Some(Liquidity { usd: Some(1_500_000.0) }),
            volume: Some(Volume { h24: Some(320_000.5) }),
            fdv: Some(2_100_000_000.0),
            url: Some("https://dexscreener.com/solana/bonk".to_string()),
        };

        let metrics = TokenMetrics::from(&pair);
        assert_eq!(metrics.name, "Bonk");
        assert_eq!(metrics.symbol, "BONK");
        assert_eq!(metrics.price_usd, 0.0000231);
        assert_eq!(metrics.liquidity_usd, 1_500_000.0);
        assert_eq!(metrics.volume_24h_usd, 320_000.5);
        assert_eq!(metrics.fdv_usd, 2_100_000_000.0);
        assert_eq!(metrics.external_url, "https://dexscreener.com/solana/bonk");
    }

    #[test]
    fn base_token_with_missing_symbol_keeps_name() {
        let pair = DexPair {
            base_token: Some(BaseToken {
                name: Some("Mystery".to_string()),
                symbol: None,
            }),
            ..DexPair::default()
        };

        let metrics = TokenMetrics::from(&pair);
        assert_eq!(metrics.name, "Mystery");
        assert_eq!(metrics.symbol, "N/A");
    }
}
