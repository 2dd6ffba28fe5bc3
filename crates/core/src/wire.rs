//! Wire representation of the run-state entity
//!
//! `RunStateWire` is the message exchanged across the serialization
//! boundary (network or persistent store). Field names and order are
//! part of the compatibility contract: exactly `state_id`,
//! `experiment_id`, `name`, no versioning, no extra fields.
//!
//! Decoding rejects unknown field names outright. A producer that
//! misspells a field must fail loudly at the boundary instead of
//! silently binding nothing; the entity constructor then catches the
//! genuinely absent fields.

use crate::entity::RunState;
use crate::error::EntityError;
use serde::{Deserialize, Serialize};

/// Wire-format message for [`RunState`]
///
/// Fields are optional on the wire; absence maps to a missing value
/// and fails entity construction, never a silent default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunStateWire {
    /// Opaque identifier of the run state
    #[serde(default)]
    pub state_id: Option<String>,
    /// Identifier of the owning experiment
    #[serde(default)]
    pub experiment_id: Option<String>,
    /// Human-readable label
    #[serde(default)]
    pub name: Option<String>,
}

impl RunState {
    /// Convert to the wire-format message
    ///
    /// Pure: fields are copied straight across, in declaration order,
    /// without transformation.
    pub fn to_wire(&self) -> RunStateWire {
        RunStateWire {
            state_id: Some(self.state_id().to_string()),
            experiment_id: Some(self.experiment_id().to_string()),
            name: Some(self.name().to_string()),
        }
    }

    /// Construct from a wire-format message
    ///
    /// The three fields are passed straight to [`RunState::new`];
    /// anything absent on the wire propagates as `InvalidArgument`.
    pub fn from_wire(wire: RunStateWire) -> Result<Self, EntityError> {
        RunState::new(wire.state_id, wire.experiment_id, wire.name)
    }
}
