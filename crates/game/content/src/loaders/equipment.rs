//! Equipment catalog loader.

use std::path::Path;

use game_core::Equipment;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Equipment catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    pub items: Vec<Equipment>,
}

/// Loader for equipment catalogs from RON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load an equipment catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Equipment>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an equipment catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Equipment>> {
        let catalog: EquipmentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}
