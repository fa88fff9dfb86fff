//! Error types for the tick pipeline.

use crate::catalog::CatalogError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::SlotError;

/// Identifies which stage of the tick pipeline produced an error.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TickPhase {
    Hover,
    Drag,
    Pickup,
}

/// Associates a tick phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickPhaseError<E> {
    pub phase: TickPhase,
    pub error: E,
}

impl<E> TickPhaseError<E> {
    pub fn new(phase: TickPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TickPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} phase failed: {}", self.phase, self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TickPhaseError<E> {}

/// Errors surfaced while running a tick through the inventory engine.
///
/// Any of these means a collaborator handed the core an index it never
/// produced. State mutated by earlier phases of the same tick stays committed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("slot access failed: {0}")]
    Slot(TickPhaseError<SlotError>),

    #[error("catalog access failed: {0}")]
    Catalog(TickPhaseError<CatalogError>),
}

impl EngineError {
    pub fn slot(phase: TickPhase, error: SlotError) -> Self {
        Self::Slot(TickPhaseError::new(phase, error))
    }

    pub fn catalog(phase: TickPhase, error: CatalogError) -> Self {
        Self::Catalog(TickPhaseError::new(phase, error))
    }

    /// Phase that produced the error.
    pub fn phase(&self) -> TickPhase {
        match self {
            Self::Slot(inner) => inner.phase,
            Self::Catalog(inner) => inner.phase,
        }
    }
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Slot(inner) => inner.error.severity(),
            Self::Catalog(inner) => inner.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Slot(inner) => inner.error.error_code(),
            Self::Catalog(inner) => inner.error.error_code(),
        }
    }
}
