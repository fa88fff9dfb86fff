//! Scripted scene standing in for a game engine.
//!
//! Objects live in a flat map keyed by [`WorldItemRef`]. The sight query does
//! no geometry beyond a range check: each frame names the object under the
//! crosshair, and the scene reports it if it still exists and is within reach.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use inventory_core::{
    CatalogIndex, CursorMode, ItemDefinition, SightHit, ViewRay, WorldItemRef, WorldPosition,
};
use runtime::{
    CollaboratorError, CursorControl, ItemPlacement, MovementControl, SightQuery, WorldObjects,
};

#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub position: WorldPosition,
    pub pickup_tagged: bool,
}

#[derive(Debug, Default)]
struct Scene {
    objects: BTreeMap<WorldItemRef, SceneObject>,
    next_ref: u64,
    look_at: Option<WorldItemRef>,
}

/// Shared handle to the scripted scene. Clones observe the same objects.
#[derive(Clone, Debug, Default)]
pub struct ScriptedWorld(Rc<RefCell<Scene>>);

impl ScriptedWorld {
    /// Scene populated with `placements`, numbered from 1.
    pub fn new(placements: &[ItemPlacement]) -> Self {
        let world = Self::default();
        for placement in placements {
            world.insert(SceneObject {
                name: placement.name.clone(),
                position: placement.position,
                pickup_tagged: placement.pickup_tagged,
            });
        }
        world
    }

    fn insert(&self, object: SceneObject) -> WorldItemRef {
        let mut scene = self.0.borrow_mut();
        scene.next_ref += 1;
        let item_ref = WorldItemRef(scene.next_ref);
        scene.objects.insert(item_ref, object);
        item_ref
    }

    /// Object the next sight query aims at.
    pub fn look_at(&self, target: Option<WorldItemRef>) {
        self.0.borrow_mut().look_at = target;
    }

    pub fn object(&self, item_ref: WorldItemRef) -> Option<SceneObject> {
        self.0.borrow().objects.get(&item_ref).cloned()
    }

    /// Remaining objects in creation order.
    pub fn objects(&self) -> Vec<(WorldItemRef, SceneObject)> {
        self.0
            .borrow()
            .objects
            .iter()
            .map(|(item_ref, object)| (*item_ref, object.clone()))
            .collect()
    }
}

impl SightQuery for ScriptedWorld {
    fn cast(&mut self, ray: ViewRay, max_distance: f32) -> SightHit {
        let scene = self.0.borrow();
        let Some(target) = scene.look_at else {
            return SightHit::miss();
        };
        match scene.objects.get(&target) {
            Some(object) if ray.origin.distance(object.position) <= max_distance => {
                if object.pickup_tagged {
                    SightHit::pickup(object.name.clone(), target)
                } else {
                    SightHit::untagged(target)
                }
            }
            _ => SightHit::miss(),
        }
    }
}

impl WorldObjects for ScriptedWorld {
    fn remove(&mut self, item: WorldItemRef) -> Result<(), CollaboratorError> {
        self.0
            .borrow_mut()
            .objects
            .remove(&item)
            .map(|_| ())
            .ok_or(CollaboratorError::UnknownObject(item))
    }

    fn spawn(
        &mut self,
        _index: CatalogIndex,
        definition: &ItemDefinition,
        position: WorldPosition,
    ) -> Result<WorldItemRef, CollaboratorError> {
        Ok(self.insert(SceneObject {
            name: definition.name.clone(),
            position,
            pickup_tagged: true,
        }))
    }
}

/// Movement and pointer sinks for a host without a window.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessControls {
    movement_locked: bool,
    cursor: CursorMode,
}

impl HeadlessControls {
    pub fn movement_locked(&self) -> bool {
        self.movement_locked
    }

    pub fn cursor(&self) -> CursorMode {
        self.cursor
    }
}

impl MovementControl for HeadlessControls {
    fn set_movement_locked(&mut self, locked: bool) {
        if locked != self.movement_locked {
            tracing::debug!(locked, "movement lock changed");
        }
        self.movement_locked = locked;
    }
}

impl CursorControl for HeadlessControls {
    fn set_cursor_mode(&mut self, mode: CursorMode) {
        tracing::debug!(%mode, "cursor mode");
        self.cursor = mode;
    }
}
