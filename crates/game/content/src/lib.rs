//! Data-driven content definitions and loaders.
//!
//! This crate reads static game content from RON/TOML data files:
//! - Equipment catalogs (data-driven via RON)
//! - Spell catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Loaders return `game-core` types directly; [`ContentRegistry`] indexes
//! them by id for the runtime.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub mod registry;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EquipmentCatalog, EquipmentLoader, LoadResult, MagicCatalog,
    MagicLoader,
};

#[cfg(feature = "loaders")]
pub use registry::ContentRegistry;
