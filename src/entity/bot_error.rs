/// Failures a command handler can turn into a chat reply.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("❗ Usage: /scan [mint address]")]
    Usage,

    #[error("🚫 Token not found.")]
    NotFound,

    #[error("{0}")]
    Adapter(String),
}

impl From<anyhow::Error> for BotError {
    fn from(err: anyhow::Error) -> Self {
        BotError::Adapter(err.to_string())
    }
}
