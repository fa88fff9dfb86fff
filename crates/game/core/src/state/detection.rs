use crate::catalog::CatalogIndex;
use crate::input::WorldItemRef;

/// A sighted collectible paired with its catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedItem {
    pub item_ref: WorldItemRef,
    pub index: CatalogIndex,
}

impl TrackedItem {
    pub fn new(item_ref: WorldItemRef, index: CatalogIndex) -> Self {
        Self { item_ref, index }
    }
}

/// Currently sighted pickup target.
///
/// The world reference and catalog index are stored as one pair, so they are
/// always set and cleared together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionState {
    tracked: Option<TrackedItem>,
}

impl DetectionState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn tracked(&self) -> Option<TrackedItem> {
        self.tracked
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.tracked.is_some()
    }

    pub fn item_ref(&self) -> Option<WorldItemRef> {
        self.tracked.map(|tracked| tracked.item_ref)
    }

    pub fn index(&self) -> Option<CatalogIndex> {
        self.tracked.map(|tracked| tracked.index)
    }

    /// Returns true if `item_ref` is the instance already being tracked.
    pub fn is_tracking(&self, item_ref: WorldItemRef) -> bool {
        self.item_ref() == Some(item_ref)
    }

    pub fn track(&mut self, item_ref: WorldItemRef, index: CatalogIndex) {
        self.tracked = Some(TrackedItem::new(item_ref, index));
    }

    /// Clears the tracked pair, returning what was tracked.
    pub fn clear(&mut self) -> Option<TrackedItem> {
        self.tracked.take()
    }
}
