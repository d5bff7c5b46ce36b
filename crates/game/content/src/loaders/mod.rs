//! Content loaders for reading game data from files.
//!
//! Catalogs of equipment and spells are RON files; the game configuration is
//! TOML. Every loader returns plain `game-core` types.

pub mod config;
pub mod equipment;
pub mod factory;
pub mod magic;

pub use config::ConfigLoader;
pub use equipment::{EquipmentCatalog, EquipmentLoader};
pub use factory::ContentFactory;
pub use magic::{MagicCatalog, MagicLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
