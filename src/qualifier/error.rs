use thiserror::Error;

#[derive(Error, Debug)]
pub enum QualifierError {
    #[error("Quote is too long ({length} characters, maximum is {max})")]
    QuoteTooLong { length: usize, max: usize },

    #[error("Quote was not modified")]
    QuoteNotModified,

    #[error("Quote too long after transformation ({length} characters, maximum is {max}), not modified")]
    TransformTooLong { length: usize, max: usize },

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("No quote given for `{0}`")]
    MissingQuote(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QualifierError>;
