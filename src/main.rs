//! SPAMEK bot for Telegram - Main executable
//!
//! Scans Solana tokens on DEXScreener, scores their toxicity and lets chats
//! vote on the last scanned token. A small `/healthz` endpoint runs next to
//! the bot for the hosting platform.
use anyhow::Context;
use dotenv::dotenv;
use log::{error, info, warn};
use spamek_bot::{create_application, health, AppConfig, BotCommands, Router};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands as _;

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting SPAMEK Telegram Bot v{}", spamek_bot::VERSION);

    // Load and validate configuration
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    info!(
        "DEXScreener API: {} (timeout {}s), assets: {}, vote seeding: {:?}",
        config.dexscreener.api_url,
        config.dexscreener.timeout.as_secs(),
        config.assets_dir.display(),
        config.seed_policy
    );

    // Health endpoint runs alongside the bot
    if let Err(e) = health::spawn_health_server(config.health_port).await {
        error!("Health endpoint disabled: {:#}", e);
    }

    // Create Telegram bot instance
    let bot = Bot::new(config.bot_token.clone());

    if let Err(e) = bot.set_my_commands(BotCommands::bot_commands()).await {
        warn!("Failed to register bot commands: {}", e);
    }

    // Initialize the application components
    info!("Initializing bot application...");
    let (router, _dispatcher) =
        create_application(&config).context("Failed to initialize application")?;

    // Get the handler from the router
    let handler = router.setup_handlers();

    // Build dispatcher with control-C handling
    let mut dispatcher = teloxide::dispatching::Dispatcher::builder(bot, handler)
        .default_handler(|update| async move {
            log::debug!("Unhandled update: {:?}", update.id);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Bot is running! Press Ctrl+C to stop.");
    dispatcher.dispatch().await;

    Ok(())
}
