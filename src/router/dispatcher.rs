use log::info;
use std::sync::Arc;

use crate::commands::{callback, gif, help, scan, start, voting, BotCommands, CommandHandler};
use crate::di::ServiceContainer;
use crate::entity::Reply;

/// Something the chat transport delivered to the bot
#[derive(Debug, Clone, PartialEq)]
pub enum BotEvent {
    Command(BotCommands),
    Callback(String),
}

/// Maps inbound events to handlers and collects the replies to send back.
///
/// Every failure inside a handler is already a reply by the time it gets
/// here, so `handle` cannot fail. An empty vec means "say nothing".
pub struct CommandDispatcher {
    services: Arc<ServiceContainer>,
}

impl CommandDispatcher {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }

    pub fn services(&self) -> Arc<ServiceContainer> {
        self.services.clone()
    }

    pub async fn handle(&self, event: BotEvent) -> Vec<Reply> {
        match event {
            BotEvent::Command(command) => self.handle_command(command).await,
            BotEvent::Callback(data) => callback::handle_callback(&data, &self.services).await,
        }
    }

    async fn handle_command(&self, command: BotCommands) -> Vec<Reply> {
        info!("Command received: /{}", command.name());

        let services = self.services.as_ref();
        match command {
            BotCommands::Start => start::StartCommand::execute("", services).await,
            BotCommands::Help => help::HelpCommand::execute("", services).await,
            BotCommands::Features => help::FeaturesCommand::execute("", services).await,
            BotCommands::About => help::AboutCommand::execute("", services).await,
            BotCommands::Topmemes => help::TopMemesCommand::execute("", services).await,
            BotCommands::Scan(args) => scan::ScanCommand::execute(&args, services).await,
            BotCommands::Voting => voting::VotingCommand::execute("", services).await,
            BotCommands::Gif => gif::GifCommand::execute("", services).await,
        }
    }
}
