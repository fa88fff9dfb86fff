//! Item catalog loader.

use std::path::Path;

use inventory_core::{Catalog, ItemDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for the item catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the item catalog from a RON file.
    ///
    /// Definition order in the file is catalog order. Duplicate names are
    /// accepted; lookups resolve them to the first definition.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid item catalog {}: {}", path.display(), e))
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(Catalog::new(catalog.items)?)
    }
}
