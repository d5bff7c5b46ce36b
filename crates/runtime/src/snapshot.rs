//! Serializable session state.

use game_core::Character;
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};

/// Everything needed to resume a session: the character (including the
/// proficiency of every equipped spell) and the pause flag.
///
/// The experience curve is configuration, not state, and is supplied again on
/// restore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub character: Character,
    pub paused: bool,
}

impl SessionSnapshot {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(RuntimeError::Snapshot)
    }

    /// Decodes a snapshot and rejects characters that break the engine's
    /// invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let snapshot: Self = bincode::deserialize(bytes).map_err(RuntimeError::Snapshot)?;
        snapshot.character.validate()?;
        Ok(snapshot)
    }

    /// Human-readable dump for debugging.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
