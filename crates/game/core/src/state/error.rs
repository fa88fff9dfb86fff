//! Slot grid errors.
//!
//! Every variant here is a programmer error: correct collaborators never hand
//! the core an index outside the grid or the catalog.

use crate::catalog::CatalogError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::SlotIndex;

/// Errors raised by slot grid mutators.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotError {
    /// Slot index is outside the grid.
    #[error("slot {slot} is out of range (capacity: {capacity})")]
    InvalidIndex {
        /// The rejected slot.
        slot: SlotIndex,
        /// Number of slots in the grid.
        capacity: usize,
    },

    /// The catalog index to store does not address a definition.
    #[error("cannot store item: {0}")]
    InvalidItem(#[from] CatalogError),
}

impl GameError for SlotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidIndex { .. } => ErrorSeverity::Internal,
            Self::InvalidItem(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidIndex { .. } => "SLOT_INVALID_INDEX",
            Self::InvalidItem(_) => "SLOT_INVALID_ITEM",
        }
    }
}
