//! Entity-level error types for wire encoding
//!
//! This module defines the `EntityError` enum raised by entity
//! construction and the lifecycle guard, and the `WireError` struct for
//! JSON wire encoding.
//!
//! ## Wire Format
//!
//! All errors encode to JSON as:
//! ```json
//! {
//!   "code": "InvalidArgument",
//!   "message": "Missing required field: state_id",
//!   "details": {"field": "state_id"}
//! }
//! ```
//!
//! ## Error Codes (Canonical)
//!
//! These codes are frozen and must not change:
//!
//! | Code | Description |
//! |------|-------------|
//! | InvalidArgument | Required field missing or null at construction |
//! | WrongType | Recognized mapping key holds a non-string value |
//! | IllegalState | Run is not in the active lifecycle stage |

use crate::lifecycle::LifecycleStage;
use serde_json::{json, Value};

/// Wire error representation for JSON encoding
///
/// This is the canonical wire format for all entity errors:
/// ```json
/// {
///   "code": "InvalidArgument",
///   "message": "Missing required field: state_id",
///   "details": {"field": "state_id"}
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WireError {
    /// The canonical error code (e.g., "InvalidArgument")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details as a JSON object
    pub details: Option<Value>,
}

/// Errors raised by entity construction, conversion, and the lifecycle
/// guard
///
/// Each variant maps to one of the canonical error codes. All failures
/// are synchronous contract violations; nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// A required field was missing or null at construction
    InvalidArgument {
        /// The first field that failed validation
        field: &'static str,
    },

    /// A recognized mapping key held a value of the wrong type
    WrongType {
        /// The field being bound
        field: &'static str,
        /// Expected JSON type
        expected: &'static str,
        /// Actual JSON type found
        actual: &'static str,
    },

    /// An operation required an active run, but the run is not active
    IllegalState {
        /// The run whose lifecycle stage was checked
        run_id: String,
        /// The stage the run was actually in
        stage: LifecycleStage,
    },
}

impl EntityError {
    /// Shorthand for the missing-required-field case
    pub fn invalid_argument(field: &'static str) -> Self {
        EntityError::InvalidArgument { field }
    }

    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::InvalidArgument { .. } => "InvalidArgument",
            EntityError::WrongType { .. } => "WrongType",
            EntityError::IllegalState { .. } => "IllegalState",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            EntityError::InvalidArgument { field } => {
                format!("Missing required field: {}", field)
            }
            EntityError::WrongType {
                field,
                expected,
                actual,
            } => format!(
                "Wrong type for field '{}': expected {}, got {}",
                field, expected, actual
            ),
            EntityError::IllegalState { run_id, stage } => format!(
                "Run '{}' must be in the 'active' lifecycle stage, but is '{}'",
                run_id, stage
            ),
        }
    }

    /// Convert to wire error format
    pub fn to_wire_error(&self) -> WireError {
        WireError {
            code: self.error_code().to_string(),
            message: self.message(),
            details: Some(self.details()),
        }
    }

    /// Get the structured details for this error
    fn details(&self) -> Value {
        match self {
            EntityError::InvalidArgument { field } => json!({ "field": field }),
            EntityError::WrongType {
                field,
                expected,
                actual,
            } => json!({ "field": field, "expected": expected, "actual": actual }),
            EntityError::IllegalState { run_id, stage } => {
                json!({ "run_id": run_id, "stage": stage.as_str() })
            }
        }
    }
}

impl std::fmt::Display for EntityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EntityError {}
