// Custom error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MacroIndexError {
    #[error("Currency {0} not supported")]
    UnknownCurrency(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A type alias for Result that uses our custom error type
pub type Result<T> = std::result::Result<T, MacroIndexError>;
