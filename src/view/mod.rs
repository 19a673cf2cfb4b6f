pub mod reply_view;

pub use reply_view::{ReplyView, TelegramReplyView};
