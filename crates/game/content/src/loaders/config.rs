//! Inventory configuration loader.

use std::path::Path;

use inventory_core::InventoryConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for inventory configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`InventoryConfig::default`].
    pub fn load(path: &Path) -> LoadResult<InventoryConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<InventoryConfig> {
        let config: InventoryConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.slots_per_row == 0 {
            anyhow::bail!("slots_per_row must be at least 1");
        }
        if config.sight_range.is_nan() || config.sight_range <= 0.0 {
            anyhow::bail!("sight_range must be positive (got {})", config.sight_range);
        }
        if !(config.max_animation_elapsed > 0.0 && config.max_animation_elapsed <= 1.0) {
            anyhow::bail!(
                "max_animation_elapsed must be in (0, 1] (got {})",
                config.max_animation_elapsed
            );
        }
        Ok(config)
    }
}
