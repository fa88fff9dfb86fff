//! Per-tick facts supplied by collaborators.
//!
//! The core never polls devices or casts rays itself. Hosts sample the input
//! devices, the presentation layer and the sight query, then hand the results
//! to the engine as one [`TickInput`].
mod geometry;

pub use geometry::{PointerOffset, ViewRay, WorldPosition};

use bitflags::bitflags;
use core::fmt;

use crate::state::SlotIndex;

/// Opaque identity of a world object instance, assigned by the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WorldItemRef(pub u64);

impl fmt::Display for WorldItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj#{}", self.0)
    }
}

/// Result of the short-range sight query cast from the viewport center.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SightHit {
    /// Something was hit within range.
    pub hit: bool,
    /// The hit object carries the pickup capability.
    pub pickup_tagged: bool,
    /// Item name of the hit object, when it is a collectible.
    pub item_name: Option<String>,
    /// Scene identity of the hit object.
    pub item_ref: Option<WorldItemRef>,
}

impl SightHit {
    /// Nothing within range.
    pub fn miss() -> Self {
        Self::default()
    }

    /// Hit an object without the pickup capability.
    pub fn untagged(item_ref: WorldItemRef) -> Self {
        Self {
            hit: true,
            pickup_tagged: false,
            item_name: None,
            item_ref: Some(item_ref),
        }
    }

    /// Hit a collectible object.
    pub fn pickup(name: impl Into<String>, item_ref: WorldItemRef) -> Self {
        Self {
            hit: true,
            pickup_tagged: true,
            item_name: Some(name.into()),
            item_ref: Some(item_ref),
        }
    }

    /// Returns the collectible's name and identity if this is a tagged hit.
    pub fn collectible(&self) -> Option<(&str, WorldItemRef)> {
        if !self.is_pickup_hit() {
            return None;
        }
        Some((self.item_name.as_deref()?, self.item_ref?))
    }

    #[inline]
    pub fn is_pickup_hit(&self) -> bool {
        self.hit && self.pickup_tagged
    }
}

/// Slot under the pointer as computed by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoverSample {
    pub slot: SlotIndex,
    /// Offset from the pointer to the slot's top-left corner.
    pub offset: PointerOffset,
}

impl HoverSample {
    pub fn new(slot: SlotIndex, offset: PointerOffset) -> Self {
        Self { slot, offset }
    }
}

bitflags! {
    /// Discrete input events observed during a tick.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct InputEvents: u8 {
        const TOGGLE_INVENTORY = 1 << 0;
        const PRESS_BEGIN      = 1 << 1;
        const PRESS_END        = 1 << 2;
        const PICKUP           = 1 << 3;
    }
}

/// Everything the engine consumes for one tick.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TickInput {
    /// Elapsed time since the previous tick, in seconds.
    pub dt: f32,
    pub events: InputEvents,
    pub hover: Option<HoverSample>,
    pub view: ViewRay,
    pub sight: SightHit,
}

impl TickInput {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    pub fn with_events(mut self, events: InputEvents) -> Self {
        self.events |= events;
        self
    }

    pub fn with_hover(mut self, hover: HoverSample) -> Self {
        self.hover = Some(hover);
        self
    }

    pub fn with_view(mut self, view: ViewRay) -> Self {
        self.view = view;
        self
    }

    pub fn with_sight(mut self, sight: SightHit) -> Self {
        self.sight = sight;
        self
    }
}
