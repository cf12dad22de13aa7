//! Error types for sqlstep

use thiserror::Error;

/// The main error type for statement building
#[derive(Error, Debug)]
pub enum Error {
    /// An argument was rejected at the call that introduced it
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The statement was already rendered
    #[error("Illegal state: {message}")]
    IllegalState { message: String },

    /// An absent value was passed where a token is required
    #[error("Missing value: {message}")]
    MissingValue { message: String },

    /// Connection or execution error raised while validating a statement
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An SQL engine rejected the rendered text
    #[error("{engine} rejected statement: {message}")]
    Validation { engine: String, message: String },
}

/// Convenience Result type for sqlstep operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new illegal state error
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }

    /// Create a new missing value error
    pub fn missing_value(message: impl Into<String>) -> Self {
        Self::MissingValue {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(engine: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            engine: engine.into(),
            message: message.into(),
        }
    }
}
