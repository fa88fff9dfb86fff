//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate:
//! the collaborator traits a host implements and the errors it receives back.

pub mod collaborators;
pub mod errors;

pub use collaborators::{CursorControl, MovementControl, SightQuery, WorldObjects};
pub use errors::{CollaboratorError, CollaboratorKind, Result, RuntimeError};
