use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use teloxide::{
    dispatching::{UpdateFilterExt, UpdateHandler},
    prelude::*,
};

use crate::commands::BotCommands;
use crate::view::{ReplyView, TelegramReplyView};

pub mod dispatcher;

pub use dispatcher::{BotEvent, CommandDispatcher};

// Base router trait
#[async_trait]
pub trait Router: Send + Sync {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error>;
}

// Command router implementation
pub struct TelegramRouter {
    dispatcher: Arc<CommandDispatcher>,
}

impl TelegramRouter {
    pub fn new(dispatcher: Arc<CommandDispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl Router for TelegramRouter {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error> {
        let dispatcher_for_commands = self.dispatcher.clone();
        let dispatcher_for_callbacks = self.dispatcher.clone();

        // Use BotCommands enum with teloxide's command filter; anything else is not matched
        let command_handler = teloxide::filter_command::<BotCommands, _>().endpoint(
            move |bot: Bot, msg: Message, command: BotCommands| {
                let dispatcher = dispatcher_for_commands.clone();
                async move {
                    let replies = dispatcher.handle(BotEvent::Command(command)).await;
                    TelegramReplyView::new(bot, msg.chat.id)
                        .render(replies)
                        .await
                }
            },
        );

        let message_handler = Update::filter_message().branch(command_handler);

        // Callback query handler for the voting buttons
        let callback_handler = Update::filter_callback_query().endpoint(
            move |bot: Bot, q: CallbackQuery| {
                let dispatcher = dispatcher_for_callbacks.clone();
                async move {
                    // Acknowledge the callback query to stop loading animation
                    if let Err(err) = bot.answer_callback_query(q.id.clone()).await {
                        debug!("Failed to answer callback query: {}", err);
                    }

                    let (Some(data), Some(message)) = (q.data.clone(), q.message.as_ref()) else {
                        return Ok(());
                    };
                    let chat_id = message.chat().id;

                    let replies = dispatcher.handle(BotEvent::Callback(data)).await;
                    TelegramReplyView::new(bot, chat_id).render(replies).await
                }
            },
        );

        dptree::entry()
            .branch(message_handler)
            .branch(callback_handler)
    }
}
