//! Seams to the systems the inventory does not own.
//!
//! Hosts plug in implementations backed by their engine: a physics raycast,
//! a scene graph, a character controller and the window's pointer. Scripted
//! fixtures implement the same traits for tests and headless playback.
use inventory_core::{
    CatalogIndex, CursorMode, ItemDefinition, SightHit, ViewRay, WorldItemRef, WorldPosition,
};

use super::errors::CollaboratorError;

/// Gate on first-person movement and camera look.
pub trait MovementControl {
    /// Called exactly once per tick with the panel's open flag.
    fn set_movement_locked(&mut self, locked: bool);
}

/// Short-range ray cast from the center of the view.
pub trait SightQuery {
    /// Returns the nearest hit along `ray` within `max_distance`.
    fn cast(&mut self, ray: ViewRay, max_distance: f32) -> SightHit;
}

/// Scene object lifecycle.
pub trait WorldObjects {
    /// Destroys a collected instance.
    fn remove(&mut self, item: WorldItemRef) -> Result<(), CollaboratorError>;

    /// Instantiates `definition` at `position` and returns its identity.
    fn spawn(
        &mut self,
        index: CatalogIndex,
        definition: &ItemDefinition,
        position: WorldPosition,
    ) -> Result<WorldItemRef, CollaboratorError>;
}

/// Pointer visibility and confinement.
pub trait CursorControl {
    fn set_cursor_mode(&mut self, mode: CursorMode);
}
