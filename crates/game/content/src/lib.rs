//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the inventory's data files:
//! - Item catalog (data-driven via RON)
//! - Inventory configuration (data-driven via TOML)
//!
//! Content is consumed once at startup and never appears in interaction state.
//!
//! All loaders use inventory-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, ItemCatalog, LoadResult};
