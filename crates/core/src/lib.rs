//! Core entity model for run-state metadata
//!
//! This crate defines the self-validating [`RunState`] entity of the
//! experiment-tracking system, together with:
//!
//! - [`RunStateWire`] - the wire-format message and the two-way
//!   conversion to/from it
//! - [`attributes`] - the capability registry the query system reads
//!   to discover searchable and orderable attributes
//! - [`LifecycleStage`] and [`check_run_is_active`] - the active-run
//!   precondition every mutation path enforces
//! - [`EntityError`] - the canonical error taxonomy with wire encoding
//!
//! Everything here is a pure value computation: no persistence, no
//! transport, no shared mutable state. All types are safe to use from
//! multiple threads without synchronization.

#![warn(missing_docs)]

pub mod attributes;
pub mod entity;
pub mod error;
pub mod lifecycle;
pub mod wire;

pub use attributes::{
    attributes_with_capability, is_attribute, AttributeCapability, AttributeMetadata,
    CapabilitySets,
};
pub use entity::RunState;
pub use error::{EntityError, WireError};
pub use lifecycle::{check_run_is_active, LifecycleStage};
pub use wire::RunStateWire;
