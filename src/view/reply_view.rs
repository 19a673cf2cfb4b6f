use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile, ParseMode},
    Bot,
};

use crate::entity::Reply;

#[async_trait]
pub trait ReplyView: Send + Sync {
    /// Sends the replies in order; an empty list sends nothing
    async fn render(&self, replies: Vec<Reply>) -> Result<()>;
}

pub struct TelegramReplyView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramReplyView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    // Legacy Markdown chokes on stray `_` or `*` in token names; fall back to plain text
    #[allow(deprecated)]
    async fn send_markdown(&self, text: String) -> Result<()> {
        if let Err(e) = self
            .bot
            .send_message(self.chat_id, text.clone())
            .parse_mode(ParseMode::Markdown)
            .await
        {
            warn!("Markdown message rejected ({}), resending as plain text", e);
            self.bot.send_message(self.chat_id, text).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl ReplyView for TelegramReplyView {
    async fn render(&self, replies: Vec<Reply>) -> Result<()> {
        for reply in replies {
            match reply {
                Reply::Text(text) => {
                    self.bot.send_message(self.chat_id, text).await?;
                }
                Reply::Markdown(text) => self.send_markdown(text).await?,
                Reply::Keyboard { text, buttons } => {
                    let keyboard = InlineKeyboardMarkup::new(vec![buttons
                        .into_iter()
                        .map(|(label, data)| InlineKeyboardButton::callback(label, data))
                        .collect::<Vec<_>>()]);

                    self.bot
                        .send_message(self.chat_id, text)
                        .reply_markup(keyboard)
                        .await?;
                }
                Reply::Photo { path, caption } => {
                    self.bot
                        .send_photo(self.chat_id, InputFile::file(path))
                        .caption(caption)
                        .await?;
                }
                Reply::Animation { path } => {
                    self.bot
                        .send_animation(self.chat_id, InputFile::file(path))
                        .await?;
                }
            }
        }

        Ok(())
    }
}
