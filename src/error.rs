//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! `BookError`'s display text is exactly what the command loop prints, so
//! the conversion from failure to user-facing message happens in one place.

use crate::domain::ValidationError;
use thiserror::Error;

/// Message used when a contact lookup misses and no more specific text applies.
pub const CONTACT_NOT_FOUND: &str = "contact not found";

/// Message used when `change` names a phone the contact does not have.
pub const OLD_PHONE_NOT_FOUND: &str = "old phone number not found";

/// Errors that can occur while handling a single command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name, phone, or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A contact or phone could not be found
    #[error("{0}")]
    NotFound(String),

    /// The command received fewer positional arguments than it needs
    #[error("not enough arguments for this command")]
    NotEnoughArguments,

    /// The command word is not one the assistant knows
    #[error("unrecognized command")]
    UnrecognizedCommand,
}

impl BookError {
    /// A not-found error carrying the default contact message.
    pub fn contact_not_found() -> Self {
        Self::NotFound(CONTACT_NOT_FOUND.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
