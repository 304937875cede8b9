//! Error Types

use thiserror::Error;

/// Result type alias for landing page operations
pub type Result<T> = std::result::Result<T, LandingError>;

/// Landing page error types
#[derive(Error, Debug)]
pub enum LandingError {
    /// A record is missing a required field
    #[error("Validation error: {0}")]
    Validation(String),

    /// Encoded column could not be read back (e.g. the features blob)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backing store failure
    #[error("Store error: {0}")]
    Store(String),

    /// Multimodal model failure
    #[error("Model error: {0}")]
    Model(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl LandingError {
    /// Check if error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Model(_))
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => format!("Invalid input: {msg}"),
            Self::Store(_) => "The service is temporarily unavailable. Please try again.".into(),
            Self::Model(_) => "Avatar generation is currently unavailable.".into(),
            Self::Config(_) => "Service configuration error.".into(),
            _ => "An unexpected error occurred.".into(),
        }
    }
}

impl From<anyhow::Error> for LandingError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_are_retryable() {
        assert!(LandingError::Store("connection reset".into()).is_retryable());
        assert!(!LandingError::Validation("missing id".into()).is_retryable());
    }

    #[test]
    fn test_user_message_hides_internals() {
        let err = LandingError::Store("pool exhausted on 10.0.0.4".into());
        assert!(!err.user_message().contains("10.0.0.4"));
    }
}
