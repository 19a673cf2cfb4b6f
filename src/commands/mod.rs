use crate::di::ServiceContainer;
use crate::entity::Reply;

pub mod callback;
pub mod gif;
pub mod help;
pub mod scan;
pub mod start;
pub mod voting;

/// Trait that defines a command handler
pub trait CommandHandler {
    /// The command name in lowercase
    fn command_name() -> &'static str;

    /// Execute the command with whatever followed the command name
    async fn execute(args: &str, services: &ServiceContainer) -> Vec<Reply>;
}

/// Bot Commands enum for teloxide command filter
#[derive(teloxide::utils::command::BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommands {
    #[command(description = "wake SPAMEK up")]
    Start,
    #[command(description = "list available commands")]
    Help,
    #[command(description = "features coming soon")]
    Features,
    #[command(description = "about SPAMEK")]
    About,
    #[command(description = "scan a token: /scan [mint address]")]
    Scan(String),
    #[command(description = "vote on the last scanned token")]
    Voting,
    #[command(description = "random SPAMEK gif")]
    Gif,
    #[command(description = "top meme tokens")]
    Topmemes,
}

impl BotCommands {
    pub fn name(&self) -> &'static str {
        match self {
            BotCommands::Start => start::StartCommand::command_name(),
            BotCommands::Help => help::HelpCommand::command_name(),
            BotCommands::Features => help::FeaturesCommand::command_name(),
            BotCommands::About => help::AboutCommand::command_name(),
            BotCommands::Scan(_) => scan::ScanCommand::command_name(),
            BotCommands::Voting => voting::VotingCommand::command_name(),
            BotCommands::Gif => gif::GifCommand::command_name(),
            BotCommands::Topmemes => help::TopMemesCommand::command_name(),
        }
    }
}
