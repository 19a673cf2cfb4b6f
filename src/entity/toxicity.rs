use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk bucket derived from a toxicity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Clean,
    Suspicious,
    Toxic,
}

impl Tier {
    /// Buckets a clamped score: up to 33 is clean, 34..=66 suspicious, the rest toxic.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=33 => Tier::Clean,
            34..=66 => Tier::Suspicious,
            _ => Tier::Toxic,
        }
    }

    /// Caption shown in the scan report and under the tier image.
    pub fn caption(&self) -> &'static str {
        match self {
            Tier::Clean => "😄 CLEAN OK.",
            Tier::Suspicious => "😐 SUSPICIOUS ACTIVITY.",
            Tier::Toxic => "😡 TOXIC ZONE!",
        }
    }

    pub fn image_key(&self) -> &'static str {
        match self {
            Tier::Clean => "spamek_happy.png",
            Tier::Suspicious => "spamek_neutral.png",
            Tier::Toxic => "spamek_angry.png",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tier::Clean => write!(f, "Clean"),
            Tier::Suspicious => write!(f, "Suspicious"),
            Tier::Toxic => write!(f, "Toxic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToxicityResult {
    pub score: u8, // Always within 5..=100
    pub tier: Tier,
}
