mod bot_error;
mod reply;
mod token_metrics;
mod toxicity;
mod vote;

pub use bot_error::BotError;
pub use reply::Reply;
pub use token_metrics::{TokenMetrics, DEFAULT_PAIR_URL, UNKNOWN_NAME, UNKNOWN_SYMBOL};
pub use toxicity::{Tier, ToxicityResult};
pub use vote::{SeedPolicy, VoteChoice, VoteTally};
