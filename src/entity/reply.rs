use std::path::PathBuf;

/// One outbound chat message produced by a command handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Plain text, no parse mode.
    Text(String),
    /// Legacy Telegram Markdown (`*bold*`, `` `code` ``, `[link](url)`).
    Markdown(String),
    /// Text with one row of inline callback buttons, as `(label, callback data)`.
    Keyboard {
        text: String,
        buttons: Vec<(String, String)>,
    },
    Photo {
        path: PathBuf,
        caption: String,
    },
    Animation {
        path: PathBuf,
    },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Reply::Markdown(text.into())
    }
}
