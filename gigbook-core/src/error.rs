//! Error types for the gigbook core.

use thiserror::Error;

/// Errors that can occur in gigbook operations.
#[derive(Error, Debug)]
pub enum GigbookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No agency profile exists yet; register one first")]
    NotRegistered,

    #[error("An agency profile already exists; reset it before registering again")]
    AlreadyRegistered,

    #[error("An artist with id '{0}' already exists")]
    DuplicateArtist(String),

    #[error("Event '{0}' already carries an invitation for artist '{1}'")]
    DuplicateInvitation(String, String),

    #[error("Invitation references unknown artist '{0}'")]
    UnknownArtist(String),
}

/// Result type alias for gigbook operations.
pub type GigbookResult<T> = Result<T, GigbookError>;
