//! Convenient imports for Trackstore.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```
//! use trackstore::prelude::*;
//!
//! let searchable = attributes_with_capability("run_state", AttributeCapability::Searchable);
//! assert!(searchable.is_some());
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Entity model
pub use trackstore_core::{RunState, RunStateWire};

// Attribute capabilities
pub use trackstore_core::{
    attributes_with_capability, is_attribute, AttributeCapability, AttributeMetadata,
};

// Lifecycle guard
pub use trackstore_core::{check_run_is_active, LifecycleStage};

// Re-export serde_json for convenience
pub use serde_json::json;
