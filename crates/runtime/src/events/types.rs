//! Event types for different topics.

use inventory_core::{InventoryEvent, TrackedItem};
use serde::{Deserialize, Serialize};

/// Slot and world changes: drags, swaps, drops, pickups and full-grid notices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryChange {
    /// Tick that produced the change.
    pub tick: u64,
    pub event: InventoryEvent,
}

/// The crosshair target changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionEvent {
    pub tick: u64,
    /// New target, `None` once nothing collectible is in sight.
    pub tracked: Option<TrackedItem>,
}

/// The panel was toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEvent {
    pub tick: u64,
    pub open: bool,
}
