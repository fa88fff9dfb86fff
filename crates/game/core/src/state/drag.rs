use crate::input::PointerOffset;
use crate::state::SlotIndex;

/// Pointer drag state machine.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Slot the drag started from.
        source: SlotIndex,
        /// Offset recorded while hovering the source before the press.
        pointer_offset: PointerOffset,
    },
}

impl DragState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn source(&self) -> Option<SlotIndex> {
        match self {
            Self::Idle => None,
            Self::Dragging { source, .. } => Some(*source),
        }
    }

    pub fn pointer_offset(&self) -> Option<PointerOffset> {
        match self {
            Self::Idle => None,
            Self::Dragging { pointer_offset, .. } => Some(*pointer_offset),
        }
    }
}
