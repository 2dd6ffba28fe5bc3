//! Run lifecycle stage and the active-run precondition
//!
//! A run carries a coarse lifecycle stage that gates mutation: metadata
//! may only be attached to a run that is still active. The guard here
//! is the single enforcement point; every mutation path in the owning
//! system calls it before touching a run.

use crate::error::EntityError;
use serde::{Deserialize, Serialize};

/// Coarse lifecycle stage of a run
///
/// - Active: the run accepts new metadata
/// - Deleted: the run is soft-deleted and read-only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStage {
    /// Run is live and mutable
    Active,
    /// Run has been soft-deleted; mutation is rejected
    Deleted,
}

impl LifecycleStage {
    /// Check if the run is still active
    pub fn is_active(&self) -> bool {
        matches!(self, LifecycleStage::Active)
    }

    /// Check if the run has been deleted
    pub fn is_deleted(&self) -> bool {
        matches!(self, LifecycleStage::Deleted)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleStage::Active => "active",
            LifecycleStage::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Require that a run is in the active lifecycle stage
///
/// Returns `IllegalState` naming the run and its actual stage when the
/// run is not active. Callers invoke this before any mutation of run
/// metadata; there is no silent path around it.
pub fn check_run_is_active(run_id: &str, stage: LifecycleStage) -> Result<(), EntityError> {
    if stage.is_active() {
        return Ok(());
    }
    tracing::warn!(run_id, stage = stage.as_str(), "rejected mutation of non-active run");
    Err(EntityError::IllegalState {
        run_id: run_id.to_string(),
        stage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_stage_predicates() {
        assert!(LifecycleStage::Active.is_active());
        assert!(!LifecycleStage::Active.is_deleted());
        assert!(LifecycleStage::Deleted.is_deleted());
        assert!(!LifecycleStage::Deleted.is_active());
    }

    #[test]
    fn test_lifecycle_stage_as_str() {
        assert_eq!(LifecycleStage::Active.as_str(), "active");
        assert_eq!(LifecycleStage::Deleted.as_str(), "deleted");
    }

    #[test]
    fn test_lifecycle_stage_display() {
        assert_eq!(format!("{}", LifecycleStage::Active), "active");
        assert_eq!(format!("{}", LifecycleStage::Deleted), "deleted");
    }

    #[test]
    fn test_lifecycle_stage_serialization() {
        let json = serde_json::to_string(&LifecycleStage::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let restored: LifecycleStage = serde_json::from_str("\"deleted\"").unwrap();
        assert_eq!(restored, LifecycleStage::Deleted);
    }

    #[test]
    fn test_check_run_is_active_passes_for_active() {
        assert!(check_run_is_active("r-1", LifecycleStage::Active).is_ok());
    }

    #[test]
    fn test_check_run_is_active_rejects_deleted() {
        let err = check_run_is_active("r-1", LifecycleStage::Deleted).unwrap_err();
        match err {
            EntityError::IllegalState { run_id, stage } => {
                assert_eq!(run_id, "r-1");
                assert_eq!(stage, LifecycleStage::Deleted);
            }
            other => panic!("expected IllegalState, got {:?}", other),
        }
    }
}
