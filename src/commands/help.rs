// src/commands/help.rs
use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::entity::Reply;

pub const HELP_TEXT: &str = "📖 *Available Commands:*\n\n\
    🔍 `/scan [mint address]`\n\
    🗳 `/voting`\n\
    🎞 `/gif`\n\
    🔥 `/topmemes`\n\
    ℹ️ `/about`\n\
    🧠 `/features`";

pub const FEATURES_TEXT: &str = "🧠 *Advanced Features — COMING SOON:*\n\n\
    📊 `/liquidityprofile` — LP depth & volatility maps\n\
    🔥 `/heatmap` — Real-time token velocity tracker\n\
    🧠 `/aisignals` — Predictive AI alerts: pump/dump risk\n\
    🤖 `/aianalysis` — Neural scan of token ecosystem\n\
    📡 `/botnetwatch` — Detect suspected trading bots\n\
    🧬 `/c3dsymmetry` — Adaptive learning module that refines toxicity scoring per token type\n\
    🎖 `/badge` — Trust Score badge: Green / Yellow / Red\n\
    ☢️ `/alertlevel` — Global market toxicity meter";

pub const ABOUT_TEXT: &str = "🧠 *ABOUT SPAMEK*\n\n\
    🎯 Mission: Detect token toxicity across the Solana jungle\n\
    📡 Powered by DEXScreener API\n\
    🧬 Version: 3.6 — DEX Intelligence Protocol\n\n\
    ⚙️ *SPAMEK Intelligence Status:*\n\
    Mode: `Autonomous Scan Patrol`\n\
    Modules active: `Emotion`, `DexScan`, `Voting`\n\
    🔜 Coming: `Heatmap`, `AI Signals`, `C3D Symmetry`";

pub const TOP_MEMES_TEXT: &str = "🔥 *Top Meme Tokens:*\n\n\
    1. BONK 🚀\n\
    2. DOGWIFHAT 😎\n\
    3. MOTHER 💅\n\
    4. POPCAT 🐱\n\
    5. SHNURK ❓";

pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn command_name() -> &'static str {
        "help"
    }

    async fn execute(_args: &str, _services: &ServiceContainer) -> Vec<Reply> {
        vec![Reply::markdown(HELP_TEXT)]
    }
}

pub struct FeaturesCommand;

impl CommandHandler for FeaturesCommand {
    fn command_name() -> &'static str {
        "features"
    }

    async fn execute(_args: &str, _services: &ServiceContainer) -> Vec<Reply> {
        vec![Reply::markdown(FEATURES_TEXT)]
    }
}

pub struct AboutCommand;

impl CommandHandler for AboutCommand {
    fn command_name() -> &'static str {
        "about"
    }

    async fn execute(_args: &str, _services: &ServiceContainer) -> Vec<Reply> {
        vec![Reply::markdown(ABOUT_TEXT)]
    }
}

pub struct TopMemesCommand;

impl CommandHandler for TopMemesCommand {
    fn command_name() -> &'static str {
        "topmemes"
    }

    async fn execute(_args: &str, _services: &ServiceContainer) -> Vec<Reply> {
        vec![Reply::markdown(TOP_MEMES_TEXT)]
    }
}
