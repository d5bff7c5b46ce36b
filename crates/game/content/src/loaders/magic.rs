//! Spell catalog loader.

use std::path::Path;

use game_core::Magic;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Spell catalog structure for RON files.
///
/// Proficiency may be omitted per spell; it defaults to a fresh level 0 state.
/// Omitted base stats take the [`Magic`] defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagicCatalog {
    pub spells: Vec<Magic>,
}

/// Loader for spell catalogs from RON files.
pub struct MagicLoader;

impl MagicLoader {
    /// Load a spell catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Magic>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a spell catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Magic>> {
        let catalog: MagicCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse magic catalog RON: {}", e))?;

        Ok(catalog.spells)
    }
}
