//! Read-only item catalog.
//!
//! The catalog is loaded once at startup and never mutated afterwards. Slot
//! contents and detection results refer to entries by [`CatalogIndex`].
mod definition;

pub use definition::{CatalogIndex, ItemDefinition, PreviewHandle};

use crate::error::{ErrorSeverity, GameError};

/// Errors raised when addressing the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// Index does not address any definition.
    #[error("catalog index {index} is out of range (catalog has {len} items)")]
    IndexOutOfRange { index: CatalogIndex, len: usize },

    /// More definitions than a [`CatalogIndex`] can address.
    #[error("catalog holds {0} items, more than a catalog index can address")]
    TooLarge(usize),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IndexOutOfRange { .. } => ErrorSeverity::Internal,
            Self::TooLarge(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "CATALOG_INDEX_OUT_OF_RANGE",
            Self::TooLarge(_) => "CATALOG_TOO_LARGE",
        }
    }
}

/// Ordered list of every item the player can collect.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Catalog {
    items: Vec<ItemDefinition>,
}

impl Catalog {
    /// Builds a catalog from definitions in their final order.
    pub fn new(items: Vec<ItemDefinition>) -> Result<Self, CatalogError> {
        if items.len() > u16::MAX as usize {
            return Err(CatalogError::TooLarge(items.len()));
        }
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if `index` addresses a definition.
    #[inline]
    pub fn contains(&self, index: CatalogIndex) -> bool {
        index.as_usize() < self.items.len()
    }

    /// Returns the definition at `index`.
    pub fn get(&self, index: CatalogIndex) -> Result<&ItemDefinition, CatalogError> {
        self.items
            .get(index.as_usize())
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
    }

    /// Finds the catalog entry whose name equals `name` exactly.
    ///
    /// Linear scan in catalog order; the first match wins when names repeat.
    pub fn find_by_name(&self, name: &str) -> Option<CatalogIndex> {
        self.items
            .iter()
            .position(|item| item.name == name)
            .map(|position| CatalogIndex(position as u16))
    }

    /// Iterates over `(index, definition)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (CatalogIndex, &ItemDefinition)> {
        self.items
            .iter()
            .enumerate()
            .map(|(position, item)| (CatalogIndex(position as u16), item))
    }

    /// Returns names that occur more than once, each reported once.
    ///
    /// Duplicates are tolerated; hosts use this to warn content authors.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut duplicates: Vec<&str> = Vec::new();
        for (position, item) in self.items.iter().enumerate() {
            let name = item.name.as_str();
            if duplicates.contains(&name) {
                continue;
            }
            if self.items[position + 1..].iter().any(|other| other.name == name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}
