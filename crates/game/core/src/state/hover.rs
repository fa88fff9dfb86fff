use crate::input::{HoverSample, PointerOffset};
use crate::state::SlotIndex;

/// Slot under the pointer and the grab offset recorded for it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoverState {
    pub hovered_slot: Option<SlotIndex>,
    /// Offset captured on the most recent hover outside a drag.
    pub last_offset: PointerOffset,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records which slot is under the pointer this tick.
    pub fn set_hovered(&mut self, sample: Option<HoverSample>) {
        self.hovered_slot = sample.map(|sample| sample.slot);
    }

    /// Records this tick's grab offset once the tick's presses are resolved.
    ///
    /// A press therefore grabs with the offset from an earlier tick, and a
    /// drag keeps that offset until it ends.
    pub fn record_offset(&mut self, sample: Option<HoverSample>, dragging: bool) {
        if let Some(sample) = sample
            && !dragging
        {
            self.last_offset = sample.offset;
        }
    }
}
