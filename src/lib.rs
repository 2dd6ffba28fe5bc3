//! # Trackstore
//!
//! Run-state metadata core for an experiment-tracking system.
//!
//! Trackstore defines the self-validating [`RunState`] entity, its
//! wire-format conversion, the attribute capability registry the query
//! layer reads, and the active-run lifecycle precondition.
//!
//! ## Quick Start
//!
//! ```
//! use trackstore::prelude::*;
//!
//! # fn main() -> trackstore::Result<()> {
//! // Construct a run state; every field is required
//! let state = RunState::new(
//!     Some("s1".to_string()),
//!     Some("exp1".to_string()),
//!     Some("my-run".to_string()),
//! )?;
//!
//! // Cross the wire boundary and back
//! let restored = RunState::from_wire(state.to_wire())?;
//! assert_eq!(restored, state);
//!
//! // Discover searchable attributes reflectively
//! let searchable = attributes_with_capability("run_state", AttributeCapability::Searchable);
//! assert!(searchable.unwrap().contains("name"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! This crate models the shape and invariants of the entity and its
//! serialization boundary only. Search execution, persistence, and
//! transport belong to the owning system.

#![warn(missing_docs)]

mod error;

pub mod prelude;

// Re-export error handling
pub use error::{Error, Result};

// Re-export the core entity model
pub use trackstore_core::{
    attributes_with_capability, check_run_is_active, is_attribute, AttributeCapability,
    AttributeMetadata, CapabilitySets, EntityError, LifecycleStage, RunState, RunStateWire,
    WireError,
};
