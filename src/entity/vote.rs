use serde::{Deserialize, Serialize};

/// Per-token vote counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub approve: u64,
    pub reject: u64,
}

/// The two buttons offered by `/voting`: approve is "BAN", reject is "PASS".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteChoice {
    Approve,
    Reject,
}

impl VoteChoice {
    /// Callback data put on the inline button for `token`.
    pub fn callback_data(&self, token: &str) -> String {
        match self {
            VoteChoice::Approve => format!("vote_yes:{}", token),
            VoteChoice::Reject => format!("vote_no:{}", token),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VoteChoice::Approve => "✅ BAN",
            VoteChoice::Reject => "❌ PASS",
        }
    }
}

/// What `/scan` does to a tally that already exists for the scanned token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedPolicy {
    /// Keep the existing counts.
    #[default]
    Preserve,
    /// Zero the counts, as the first release of the bot did.
    Reset,
}

impl std::str::FromStr for SeedPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "reset" => Ok(Self::Reset),
            other => Err(anyhow::anyhow!(
                "Parse SeedPolicy error: Invalid value '{}'",
                other
            )),
        }
    }
}
