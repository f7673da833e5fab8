use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("IO error during {operation}: {message}")]
    Io { operation: String, message: String },

    #[error("{context} failed: {detail}")]
    Command { context: String, detail: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Io {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn command(context: impl Into<String>, detail: impl Into<String>) -> Self {
        Error::Command {
            context: context.into(),
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "config.invalid_value",
            Error::Manifest(_) => "manifest.invalid",
            Error::Io { .. } => "internal.io_error",
            Error::Command { .. } => "command.failed",
        }
    }
}
