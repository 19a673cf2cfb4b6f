pub mod commands;
pub mod config;
pub mod dexscreener;
pub mod di;
pub mod entity;
pub mod health;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod services;
pub mod utils;
pub mod view;

use anyhow::Result;
use std::sync::Arc;

// Re-export commonly used items
pub use commands::BotCommands;
pub use config::AppConfig;
pub use di::ServiceContainer;
pub use entity::*;
pub use router::{BotEvent, CommandDispatcher, Router, TelegramRouter};
pub use services::{compute_toxicity, VoteStore};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wire the services, the command dispatcher and the Telegram router together
pub fn create_application(config: &AppConfig) -> Result<(TelegramRouter, Arc<CommandDispatcher>)> {
    let services = Arc::new(ServiceContainer::from_config(config)?);
    let dispatcher = Arc::new(CommandDispatcher::new(services));
    let router = TelegramRouter::new(dispatcher.clone());

    Ok((router, dispatcher))
}
