//! Unified error types for Trackstore.
//!
//! This module provides a clean error type that wraps the core entity
//! errors and presents a consistent interface to users.

use thiserror::Error;
use trackstore_core::EntityError;

/// All Trackstore errors.
///
/// This is the canonical error type for all Trackstore operations. It
/// provides a clean, stable interface that hides core error details.
#[derive(Debug, Error)]
pub enum Error {
    /// Required field missing or null at construction
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Wrong type for a recognized mapping key
    #[error("wrong type: expected {expected}, got {actual}")]
    WrongType {
        /// Expected type
        expected: String,
        /// Actual type found
        actual: String,
    },

    /// Operation requires an active run
    #[error("illegal state: {0}")]
    IllegalState(String),
}

/// Result type for Trackstore operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if this is an illegal-state error.
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Error::IllegalState(_))
    }
}

impl From<EntityError> for Error {
    fn from(err: EntityError) -> Self {
        match err {
            EntityError::InvalidArgument { .. } => Error::InvalidArgument(err.message()),
            EntityError::WrongType {
                expected, actual, ..
            } => Error::WrongType {
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
            EntityError::IllegalState { .. } => Error::IllegalState(err.message()),
        }
    }
}
