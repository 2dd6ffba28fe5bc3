//! Run-state metadata entity
//!
//! This module defines `RunState`, metadata about one state of a
//! tracked run. The entity is a pure value object: all fields are
//! required at construction, immutable afterwards, and compared by
//! value.
//!
//! ## Construction Invariants
//!
//! - All three fields are present after construction; a missing field
//!   fails before an instance exists
//! - Fields are validated in declaration order; only the first missing
//!   field is reported
//! - No mutator is exposed

use crate::attributes::AttributeMetadata;
use crate::error::EntityError;
use serde_json::{Map, Value};

/// Metadata about a state of the run
///
/// Equality is value equality, shallow per field. Two `RunState`
/// instances are equal iff all three fields match; a different type
/// wrapping the same fields is never equal (nominal typing).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunState {
    state_id: String,
    experiment_id: String,
    name: String,
}

impl RunState {
    /// Declared constructor parameter names, in validation order
    ///
    /// This is the single source of truth for mapping-key filtering in
    /// [`RunState::from_dictionary`] and for the attribute registry.
    pub const FIELDS: [&'static str; 3] = ["state_id", "experiment_id", "name"];

    /// Create a new run state
    ///
    /// Inputs model nullable strings as `Option`. Each field is checked
    /// independently, in the order `state_id`, `experiment_id`, `name`;
    /// the first `None` fails with `InvalidArgument` naming that field
    /// and later fields are not inspected.
    pub fn new(
        state_id: Option<String>,
        experiment_id: Option<String>,
        name: Option<String>,
    ) -> Result<Self, EntityError> {
        let state_id = state_id.ok_or(EntityError::invalid_argument("state_id"))?;
        let experiment_id = experiment_id.ok_or(EntityError::invalid_argument("experiment_id"))?;
        let name = name.ok_or(EntityError::invalid_argument("name"))?;

        Ok(RunState {
            state_id,
            experiment_id,
            name,
        })
    }

    /// Opaque identifier of this run state
    pub fn state_id(&self) -> &str {
        &self.state_id
    }

    /// Identifier of the owning experiment
    pub fn experiment_id(&self) -> &str {
        &self.experiment_id
    }

    /// Human-readable label (searchable)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Construct from a generic string-keyed mapping
    ///
    /// Keys outside [`RunState::FIELDS`] are discarded without error,
    /// so callers holding loosely-typed dictionaries need not strip
    /// extraneous keys. A recognized key that is absent or explicitly
    /// null binds as missing and fails in `new` with `InvalidArgument`;
    /// a recognized key holding a non-string value fails with
    /// `WrongType`.
    pub fn from_dictionary(dict: &Map<String, Value>) -> Result<Self, EntityError> {
        let mut bound: [Option<String>; 3] = [None, None, None];
        for (slot, field) in bound.iter_mut().zip(Self::FIELDS) {
            *slot = bind_string_field(dict, field)?;
        }
        let [state_id, experiment_id, name] = bound;
        Self::new(state_id, experiment_id, name)
    }
}

impl AttributeMetadata for RunState {
    const ENTITY_NAME: &'static str = "run_state";

    fn searchable_attributes() -> &'static [&'static str] {
        &["name"]
    }

    fn orderable_attributes() -> &'static [&'static str] {
        &[]
    }
}

/// Bind one recognized mapping key to an optional string
///
/// Absent and null are equivalent (both bind as `None`); any other
/// non-string value is a type error, not a silent coercion.
fn bind_string_field(
    dict: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, EntityError> {
    match dict.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(EntityError::WrongType {
            field,
            expected: "String",
            actual: json_type_name(other),
        }),
    }
}

/// JSON type name for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Bool",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}
