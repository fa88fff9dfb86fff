//! Runtime orchestration for the pickup inventory.
//!
//! This crate wires the deterministic core to the systems around it: the
//! sight query, the scene, the character controller and the pointer.
//! Consumers embed [`InventoryRuntime`] to drive one tick per frame, subscribe
//! to events, and render the [`InventoryView`] each tick returns.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the collaborator traits and errors
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`view`] builds renderable snapshots
//! - [`scenario`] loads scripted sessions
pub mod api;
pub mod events;
pub mod message;
pub mod runtime;
pub mod scenario;
pub mod view;

pub use api::{
    CollaboratorError, CollaboratorKind, CursorControl, MovementControl, Result, RuntimeError,
    SightQuery, WorldObjects,
};
pub use events::{DetectionEvent, Event, EventBus, InventoryChange, PanelEvent, Topic};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use runtime::{
    CollaboratorFailure, FrameInput, InventoryRuntime, RuntimeBuilder, RuntimeConfig, TickReport,
};
pub use scenario::{ItemPlacement, Scenario, ScriptedFrame};
pub use view::{CrosshairView, DragView, InventoryView, ItemView, PanelView, SlotView};
