//! Error types for the careboard ecosystem.

use thiserror::Error;

/// Errors that can occur in careboard operations.
#[derive(Error, Debug)]
pub enum CareboardError {
    #[error("Invalid month slug '{0}', expected YYYY-MM")]
    InvalidMonthSlug(String),

    #[error("Unknown role '{0}'")]
    UnknownRole(String),

    #[error("Event not found: {0}")]
    EventNotFound(i64),

    #[error("Already signed up for event {0}")]
    AlreadyJoined(i64),

    #[error("Not signed up for event {0}")]
    NotJoined(i64),

    #[error("Event {0} is already full")]
    EventFull(i64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for careboard operations.
pub type CareboardResult<T> = Result<T, CareboardError>;
