//! Error types shared by the builder, session and terminal front end.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a generation request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("Select at least one character type.")]
    NoClassSelected,

    #[error("Password length must be at least 1.")]
    ZeroLength,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequest),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        Self::Clipboard(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }

    /// Text suitable for the password display line.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
