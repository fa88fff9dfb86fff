//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the core engine, content and collaborators so clients
//! can bubble them up with consistent context.
use std::fmt;

use inventory_core::{CatalogError, EngineError, WorldItemRef};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{kind} collaborator not set")]
    CollaboratorNotSet { kind: CollaboratorKind },

    #[error("runtime requires an item catalog before building")]
    MissingCatalog,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failure reported by a [`WorldObjects`](super::WorldObjects) implementation.
///
/// These never roll back inventory state; the runtime logs them and reports
/// them alongside the tick.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("world object {0} does not exist")]
    UnknownObject(WorldItemRef),

    #[error("scene rejected the request: {0}")]
    Rejected(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CollaboratorKind {
    Movement,
    Sight,
    World,
    Cursor,
}

impl fmt::Display for CollaboratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CollaboratorKind::Movement => "movement",
            CollaboratorKind::Sight => "sight",
            CollaboratorKind::World => "world",
            CollaboratorKind::Cursor => "cursor",
        };
        write!(f, "{}", label)
    }
}
