//! Scripted collaborators shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use inventory_core::{
    Catalog, CatalogIndex, CursorMode, HoverSample, InputEvents, ItemDefinition, PointerOffset,
    SightHit, SlotIndex, ViewRay, WorldItemRef, WorldPosition,
};
use runtime::{
    CollaboratorError, CursorControl, FrameInput, InventoryRuntime, MovementControl,
    RuntimeConfig, SightQuery, WorldObjects,
};

pub const FRAME: f32 = 1.0 / 60.0;

#[derive(Default)]
pub struct HostLog {
    pub movement_locks: Vec<bool>,
    pub cursor_modes: Vec<CursorMode>,
    pub removed: Vec<WorldItemRef>,
    pub spawned: Vec<(CatalogIndex, String, WorldPosition)>,
    pub casts: Vec<(ViewRay, f32)>,
    /// What the next sight query returns.
    pub sight: SightHit,
    /// Reject every world command.
    pub reject_world: bool,
    next_ref: u64,
}

/// One cloneable fake standing in for every collaborator.
#[derive(Clone, Default)]
pub struct MockHost(pub Rc<RefCell<HostLog>>);

impl MockHost {
    pub fn look_at(&self, sight: SightHit) {
        self.0.borrow_mut().sight = sight;
    }

    pub fn log(&self) -> std::cell::Ref<'_, HostLog> {
        self.0.borrow()
    }
}

impl MovementControl for MockHost {
    fn set_movement_locked(&mut self, locked: bool) {
        self.0.borrow_mut().movement_locks.push(locked);
    }
}

impl SightQuery for MockHost {
    fn cast(&mut self, ray: ViewRay, max_distance: f32) -> SightHit {
        let mut log = self.0.borrow_mut();
        log.casts.push((ray, max_distance));
        log.sight.clone()
    }
}

impl WorldObjects for MockHost {
    fn remove(&mut self, item: WorldItemRef) -> Result<(), CollaboratorError> {
        let mut log = self.0.borrow_mut();
        if log.reject_world {
            return Err(CollaboratorError::UnknownObject(item));
        }
        log.removed.push(item);
        Ok(())
    }

    fn spawn(
        &mut self,
        index: CatalogIndex,
        definition: &ItemDefinition,
        position: WorldPosition,
    ) -> Result<WorldItemRef, CollaboratorError> {
        let mut log = self.0.borrow_mut();
        if log.reject_world {
            return Err(CollaboratorError::Rejected("scene is read-only".to_string()));
        }
        log.next_ref += 1;
        log.spawned
            .push((index, definition.name.clone(), position));
        Ok(WorldItemRef(1000 + log.next_ref))
    }
}

impl CursorControl for MockHost {
    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.0.borrow_mut().cursor_modes.push(mode);
    }
}

pub fn catalog() -> Catalog {
    Catalog::new(vec![ItemDefinition::new("Key"), ItemDefinition::new("Coin")]).unwrap()
}

pub fn runtime_with(host: &MockHost, config: RuntimeConfig) -> InventoryRuntime {
    InventoryRuntime::builder()
        .config(config)
        .catalog(catalog())
        .movement(host.clone())
        .sight(host.clone())
        .world(host.clone())
        .cursor(host.clone())
        .build()
        .unwrap()
}

pub fn runtime(host: &MockHost) -> InventoryRuntime {
    runtime_with(host, RuntimeConfig::default())
}

pub fn frame(events: InputEvents) -> FrameInput {
    FrameInput {
        dt: FRAME,
        events,
        ..FrameInput::default()
    }
}

pub fn hovering(slot: usize, events: InputEvents) -> FrameInput {
    FrameInput {
        hover: Some(HoverSample::new(
            SlotIndex(slot),
            PointerOffset::new(-12.0, -12.0),
        )),
        ..frame(events)
    }
}

/// Picks up `count` coins, one world object per tick.
pub fn collect_coins(runtime: &mut InventoryRuntime, host: &MockHost, count: u64) {
    for n in 0..count {
        host.look_at(SightHit::pickup("Coin", WorldItemRef(n + 1)));
        runtime.tick(&frame(InputEvents::PICKUP)).unwrap();
    }
    host.look_at(SightHit::miss());
}
