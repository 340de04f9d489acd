//! Housekeeping board errors

use thiserror::Error;

use super::board::{UnitKind, UnitRef};

/// Errors surfaced by board loads and transitions.
#[derive(Debug, Error)]
pub enum BoardError {
    /// One of the three concurrent board reads failed (past its retry).
    /// Nothing from the partial result is kept.
    #[error("failed to load housekeeping board: {source}")]
    LoadFailed {
        #[source]
        source: anyhow::Error,
    },

    /// A status or assignment write failed. The unit keeps its stored state;
    /// nothing was applied optimistically.
    #[error("failed to update {kind} {id}: {source}")]
    TransitionFailed {
        kind: UnitKind,
        id: i64,
        #[source]
        source: anyhow::Error,
    },

    /// The write targeted a unit that does not exist (0 rows affected).
    #[error("no {kind} with id {id}")]
    UnitNotFound { kind: UnitKind, id: i64 },
}

impl BoardError {
    pub fn load(source: anyhow::Error) -> Self {
        Self::LoadFailed { source }
    }

    pub fn transition(unit: UnitRef, source: anyhow::Error) -> Self {
        Self::TransitionFailed {
            kind: unit.kind(),
            id: unit.raw_id(),
            source,
        }
    }

    pub fn not_found(unit: UnitRef) -> Self {
        Self::UnitNotFound {
            kind: unit.kind(),
            id: unit.raw_id(),
        }
    }
}
