use crate::entity::{Tier, TokenMetrics, ToxicityResult};

pub const MIN_SCORE: u32 = 5;
pub const MAX_SCORE: u32 = 100;

const THIN_LIQUIDITY_USD: f64 = 1_000.0;
const LOW_LIQUIDITY_USD: f64 = 5_000.0;
const HIGH_VOLUME_USD: f64 = 100_000.0;
const BLOATED_FDV_USD: f64 = 1_000_000_000.0;

/// Scores a token from its liquidity, 24h volume and FDV.
///
/// Points are additive:
/// * liquidity under $1k adds 40, under $5k adds 25
/// * 24h volume over $100k adds 20
/// * FDV over $1B adds 15
///
/// The total is clamped to `5..=100` and then bucketed into a [`Tier`].
pub fn compute_toxicity(metrics: &TokenMetrics) -> ToxicityResult {
    let mut score: u32 = 0;

    if metrics.liquidity_usd < THIN_LIQUIDITY_USD {
        score += 40;
    } else if metrics.liquidity_usd < LOW_LIQUIDITY_USD {
        score += 25;
    }

    if metrics.volume_24h_usd > HIGH_VOLUME_USD {
        score += 20;
    }

    if metrics.fdv_usd > BLOATED_FDV_USD {
        score += 15;
    }

    let score = score.clamp(MIN_SCORE, MAX_SCORE) as u8;

    ToxicityResult {
        score,
        tier: Tier::from_score(score),
    }
}
