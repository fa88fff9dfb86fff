//! Fixed-capacity slot storage.

use std::fmt;

use crate::catalog::{Catalog, CatalogError, CatalogIndex};
use crate::config::InventoryConfig;
use crate::state::SlotError;

/// Position of a slot within the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SlotIndex(pub usize);

impl SlotIndex {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// Contents of a single slot. A slot holds at most one item reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotContent {
    #[default]
    Empty,
    Occupied(CatalogIndex),
}

impl SlotContent {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub fn item(&self) -> Option<CatalogIndex> {
        match self {
            Self::Empty => None,
            Self::Occupied(index) => Some(*index),
        }
    }
}

/// The player's slot grid.
///
/// Invariants:
/// - Length is always [`InventoryConfig::SLOT_COUNT`].
/// - Every occupied slot stores an index that was valid for the catalog it was
///   assigned against.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotGrid {
    slots: [SlotContent; InventoryConfig::SLOT_COUNT],
}

impl SlotGrid {
    pub fn new() -> Self {
        Self {
            slots: [SlotContent::Empty; InventoryConfig::SLOT_COUNT],
        }
    }

    /// Number of slots. Constant for the lifetime of the grid.
    #[inline]
    pub const fn capacity(&self) -> usize {
        InventoryConfig::SLOT_COUNT
    }

    /// Validates that `slot` addresses a slot in this grid.
    #[inline]
    pub fn check(&self, slot: SlotIndex) -> Result<SlotIndex, SlotError> {
        if slot.0 < self.capacity() {
            Ok(slot)
        } else {
            Err(SlotError::InvalidIndex {
                slot,
                capacity: self.capacity(),
            })
        }
    }

    pub fn get(&self, slot: SlotIndex) -> Result<SlotContent, SlotError> {
        let slot = self.check(slot)?;
        Ok(self.slots[slot.0])
    }

    /// Returns the catalog index stored at `slot`, or `None` when the slot is
    /// empty or out of range.
    pub fn item_at(&self, slot: SlotIndex) -> Option<CatalogIndex> {
        self.slots.get(slot.0).and_then(SlotContent::item)
    }

    /// Lowest-indexed empty slot (first-fit), or `None` when the grid is full.
    pub fn first_empty_slot(&self) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(SlotContent::is_empty)
            .map(SlotIndex)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Stores `item` in `slot`, replacing whatever was there.
    pub fn assign(
        &mut self,
        slot: SlotIndex,
        item: CatalogIndex,
        catalog: &Catalog,
    ) -> Result<(), SlotError> {
        let slot = self.check(slot)?;
        if !catalog.contains(item) {
            return Err(CatalogError::IndexOutOfRange {
                index: item,
                len: catalog.len(),
            }
            .into());
        }
        self.slots[slot.0] = SlotContent::Occupied(item);
        Ok(())
    }

    /// Empties `slot` and returns what it held.
    pub fn clear(&mut self, slot: SlotIndex) -> Result<Option<CatalogIndex>, SlotError> {
        let slot = self.check(slot)?;
        Ok(core::mem::take(&mut self.slots[slot.0]).item())
    }

    /// Exchanges the contents of two slots. No-op when `a == b`.
    pub fn swap(&mut self, a: SlotIndex, b: SlotIndex) -> Result<(), SlotError> {
        let a = self.check(a)?;
        let b = self.check(b)?;
        self.slots.swap(a.0, b.0);
        Ok(())
    }

    /// Iterates over `(slot, content)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, SlotContent)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(position, content)| (SlotIndex(position), *content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemDefinition;
    use crate::error::{ErrorSeverity, GameError};

    fn catalog() -> Catalog {
        Catalog::new(vec![ItemDefinition::new("Key"), ItemDefinition::new("Coin")]).unwrap()
    }

    #[test]
    fn capacity_is_twelve() {
        let grid = SlotGrid::new();
        assert_eq!(grid.capacity(), 12);
        assert_eq!(grid.iter().count(), 12);
    }

    #[test]
    fn first_empty_slot_scans_front_to_back() {
        let catalog = catalog();
        let mut grid = SlotGrid::new();
        assert_eq!(grid.first_empty_slot(), Some(SlotIndex(0)));

        grid.assign(SlotIndex(0), CatalogIndex(0), &catalog).unwrap();
        grid.assign(SlotIndex(2), CatalogIndex(1), &catalog).unwrap();
        assert_eq!(grid.first_empty_slot(), Some(SlotIndex(1)));

        grid.clear(SlotIndex(0)).unwrap();
        assert_eq!(grid.first_empty_slot(), Some(SlotIndex(0)));
    }

    #[test]
    fn full_grid_has_no_empty_slot() {
        let catalog = catalog();
        let mut grid = SlotGrid::new();
        for slot in 0..grid.capacity() {
            grid.assign(SlotIndex(slot), CatalogIndex(1), &catalog)
                .unwrap();
        }
        assert!(grid.is_full());
        assert_eq!(grid.first_empty_slot(), None);
        assert_eq!(grid.occupied_count(), 12);
    }

    #[test]
    fn assign_validates_slot_and_catalog_index() {
        let catalog = catalog();
        let mut grid = SlotGrid::new();

        let err = grid
            .assign(SlotIndex(12), CatalogIndex(0), &catalog)
            .unwrap_err();
        assert_eq!(
            err,
            SlotError::InvalidIndex {
                slot: SlotIndex(12),
                capacity: 12
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Internal);

        let err = grid
            .assign(SlotIndex(0), CatalogIndex(2), &catalog)
            .unwrap_err();
        assert!(matches!(err, SlotError::InvalidItem(_)));
        assert_eq!(err.error_code(), "SLOT_INVALID_ITEM");

        // Rejected assignments leave the grid untouched
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn clear_returns_previous_content() {
        let catalog = catalog();
        let mut grid = SlotGrid::new();
        grid.assign(SlotIndex(4), CatalogIndex(1), &catalog).unwrap();

        assert_eq!(grid.clear(SlotIndex(4)).unwrap(), Some(CatalogIndex(1)));
        assert_eq!(grid.clear(SlotIndex(4)).unwrap(), None);
        assert!(grid.clear(SlotIndex(99)).is_err());
    }

    #[test]
    fn swap_is_involutive() {
        let catalog = catalog();
        let mut grid = SlotGrid::new();
        grid.assign(SlotIndex(0), CatalogIndex(0), &catalog).unwrap();
        grid.assign(SlotIndex(5), CatalogIndex(1), &catalog).unwrap();
        let original = grid.clone();

        for a in 0..grid.capacity() {
            for b in 0..grid.capacity() {
                grid.swap(SlotIndex(a), SlotIndex(b)).unwrap();
                grid.swap(SlotIndex(a), SlotIndex(b)).unwrap();
                assert_eq!(grid, original, "swap({a}, {b}) twice changed the grid");
            }
        }
    }

    #[test]
    fn swap_moves_item_into_empty_slot() {
        let catalog = catalog();
        let mut grid = SlotGrid::new();
        grid.assign(SlotIndex(3), CatalogIndex(1), &catalog).unwrap();

        grid.swap(SlotIndex(3), SlotIndex(7)).unwrap();
        assert_eq!(grid.item_at(SlotIndex(3)), None);
        assert_eq!(grid.item_at(SlotIndex(7)), Some(CatalogIndex(1)));
    }

    #[test]
    fn swap_with_self_is_noop() {
        let catalog = catalog();
        let mut grid = SlotGrid::new();
        grid.assign(SlotIndex(1), CatalogIndex(0), &catalog).unwrap();
        let before = grid.clone();
        grid.swap(SlotIndex(1), SlotIndex(1)).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn swap_rejects_out_of_range_slot() {
        let mut grid = SlotGrid::new();
        assert!(grid.swap(SlotIndex(0), SlotIndex(12)).is_err());
    }
}
