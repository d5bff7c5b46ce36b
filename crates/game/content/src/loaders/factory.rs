//! Content factory resolving data files inside a data directory.

use std::path::{Path, PathBuf};

use game_core::{Equipment, GameConfig, Magic};

use crate::loaders::{ConfigLoader, EquipmentLoader, LoadResult, MagicLoader};

pub const EQUIPMENT_FILE: &str = "equipment.ron";
pub const MAGIC_FILE: &str = "magic.ron";
pub const CONFIG_FILE: &str = "game.toml";

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── game.toml
/// ├── equipment.ron
/// └── magic.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `game.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the equipment catalog from `equipment.ron`.
    pub fn load_equipment(&self) -> LoadResult<Vec<Equipment>> {
        EquipmentLoader::load(&self.data_dir.join(EQUIPMENT_FILE))
    }

    /// Load the spell catalog from `magic.ron`.
    pub fn load_magic(&self) -> LoadResult<Vec<Magic>> {
        MagicLoader::load(&self.data_dir.join(MAGIC_FILE))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
