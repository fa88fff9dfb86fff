//! Deterministic inventory logic and data types shared across hosts.
//!
//! `inventory-core` defines the canonical rules of the pickup inventory: the
//! slot grid, detection of collectibles, drag-and-drop resolution, pickups and
//! the panel animation. It performs no I/O. All state mutation flows through
//! [`engine::InventoryEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod state;

pub use catalog::{Catalog, CatalogError, CatalogIndex, ItemDefinition, PreviewHandle};
pub use config::{InventoryConfig, KeyBindings};
pub use engine::{
    CursorMode, EngineError, InventoryEngine, InventoryEvent, Notification, TickOutcome,
    TickPhase, TickPhaseError, WorldCommand, WorldCommands,
};
pub use error::{ErrorSeverity, GameError};
pub use input::{
    HoverSample, InputEvents, PointerOffset, SightHit, TickInput, ViewRay, WorldItemRef,
    WorldPosition,
};
pub use state::{
    DetectionState, DragState, HoverState, InteractionState, PanelAnimation, SlotContent,
    SlotError, SlotGrid, SlotIndex, SuppressedSlots, TrackedItem,
};
