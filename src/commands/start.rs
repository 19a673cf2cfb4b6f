use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::entity::Reply;
use crate::services::START_IMAGE;

pub const GREETING: &str = "👋 Hello! I’m SPAMEK — the shitcoin hunter patrolling Solana.\n\n\
    🔍 I scan the blockchain and detect token toxicity before it burns you.\n\n\
    🛠 Type /help to see what I can do.\n\n\
    🥫 SCAN ACTIVE.";

pub struct StartCommand;

impl CommandHandler for StartCommand {
    fn command_name() -> &'static str {
        "start"
    }

    async fn execute(_args: &str, services: &ServiceContainer) -> Vec<Reply> {
        match services.assets().image(START_IMAGE) {
            Some(path) => vec![Reply::Photo {
                path,
                caption: GREETING.to_string(),
            }],
            None => vec![Reply::text(GREETING)],
        }
    }
}
