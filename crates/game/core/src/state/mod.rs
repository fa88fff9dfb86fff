//! Authoritative inventory state.
//!
//! Everything the engine mutates lives in one [`InteractionState`] owned by the
//! caller. Runtime layers read it to build views but mutate it exclusively
//! through the engine.
mod detection;
mod drag;
mod error;
mod hover;
mod panel;
mod slots;

pub use detection::{DetectionState, TrackedItem};
pub use drag::DragState;
pub use error::SlotError;
pub use hover::HoverState;
pub use panel::PanelAnimation;
pub use slots::{SlotContent, SlotGrid, SlotIndex};

use arrayvec::ArrayVec;

use crate::config::InventoryConfig;

/// Slots hidden from the grid while a drag is in progress.
pub type SuppressedSlots = ArrayVec<SlotIndex, { InventoryConfig::MAX_SUPPRESSED_SLOTS }>;

/// Complete interaction state of one player's inventory.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionState {
    pub slots: SlotGrid,
    pub detection: DetectionState,
    pub drag: DragState,
    pub hover: HoverState,
    pub panel: PanelAnimation,
}

impl InteractionState {
    /// Empty grid, nothing tracked, idle drag, closed panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slots the presentation layer renders as placeholders this tick.
    ///
    /// While dragging, the source slot and the hovered slot are suppressed.
    /// Both are reported once when they coincide.
    pub fn suppressed_slots(&self) -> SuppressedSlots {
        let mut suppressed = SuppressedSlots::new();
        if let Some(source) = self.drag.source() {
            suppressed.push(source);
            if let Some(hovered) = self.hover.hovered_slot
                && hovered != source
            {
                suppressed.push(hovered);
            }
        }
        suppressed
    }

    pub fn is_suppressed(&self, slot: SlotIndex) -> bool {
        self.suppressed_slots().contains(&slot)
    }
}
