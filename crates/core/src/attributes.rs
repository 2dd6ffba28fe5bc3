//! Attribute capability registry
//!
//! The owning query system needs to know, per entity type, which named
//! attributes may appear in search predicates and which in sort
//! clauses. Instead of attaching that metadata through a language
//! trick (property wrappers, side tables), entities declare it through
//! [`AttributeMetadata`] and a process-wide registry exposes it by
//! entity name for reflective discovery.
//!
//! ## Contract
//!
//! The registry is read-only after first access. For `run_state` the
//! searchable set is exactly `{"name"}` and the orderable set is
//! empty.

use crate::entity::RunState;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet};

/// Capability a declared attribute may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeCapability {
    /// Attribute may appear in search filter predicates
    Searchable,
    /// Attribute may appear in sort/order clauses
    Orderable,
}

impl AttributeCapability {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeCapability::Searchable => "searchable",
            AttributeCapability::Orderable => "orderable",
        }
    }
}

impl std::fmt::Display for AttributeCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declarative attribute metadata for an entity type
///
/// Implementations list their capability-tagged attributes once, at
/// the type level; the registry picks the lists up at startup.
pub trait AttributeMetadata {
    /// Registry key for this entity type
    const ENTITY_NAME: &'static str;

    /// Attributes eligible for search filter predicates
    fn searchable_attributes() -> &'static [&'static str];

    /// Attributes eligible for sort/order clauses
    fn orderable_attributes() -> &'static [&'static str];
}

/// Capability sets for one entity type
#[derive(Debug, Clone)]
pub struct CapabilitySets {
    searchable: BTreeSet<&'static str>,
    orderable: BTreeSet<&'static str>,
}

impl CapabilitySets {
    fn of<T: AttributeMetadata>() -> Self {
        CapabilitySets {
            searchable: T::searchable_attributes().iter().copied().collect(),
            orderable: T::orderable_attributes().iter().copied().collect(),
        }
    }

    /// The attribute set carrying the given capability
    pub fn with_capability(&self, capability: AttributeCapability) -> &BTreeSet<&'static str> {
        match capability {
            AttributeCapability::Searchable => &self.searchable,
            AttributeCapability::Orderable => &self.orderable,
        }
    }
}

// Every entity type with capability-tagged attributes registers here.
static REGISTRY: Lazy<BTreeMap<&'static str, CapabilitySets>> = Lazy::new(|| {
    let mut registry = BTreeMap::new();
    registry.insert(RunState::ENTITY_NAME, CapabilitySets::of::<RunState>());
    registry
});

/// Look up the attribute set of an entity type for one capability
///
/// Returns `None` for an entity name the registry does not know.
pub fn attributes_with_capability(
    entity: &str,
    capability: AttributeCapability,
) -> Option<&'static BTreeSet<&'static str>> {
    REGISTRY
        .get(entity)
        .map(|sets| sets.with_capability(capability))
}

/// Check whether one attribute of an entity carries a capability
pub fn is_attribute(entity: &str, capability: AttributeCapability, attribute: &str) -> bool {
    attributes_with_capability(entity, capability)
        .map(|set| set.contains(attribute))
        .unwrap_or(false)
}
