//! Input-layer commands accepted by [`GameSession::dispatch`].
//!
//! [`GameSession::dispatch`]: crate::GameSession::dispatch
use std::sync::Arc;

use game_core::{CastOutcome, DamageOutcome, Equipment, EquipmentSlot, LevelUpReport, MagicId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    TakeDamage(u32),
    Heal(u32),
    RecoverMp(u32),
    CastMagic(MagicId),
    AddExperience(u32),
    /// Debug shortcut: exactly enough experience for one level.
    GrantLevel,
    AddGold(u32),
    SpendGold(u32),
    Equip(Arc<Equipment>),
    Unequip(EquipmentSlot),
    TogglePause,
    SetPaused(bool),
    Reset,
}

impl Command {
    /// Commands that still run while the session is paused.
    pub const fn bypasses_pause(&self) -> bool {
        matches!(self, Self::TogglePause | Self::SetPaused(_))
    }
}

/// What a dispatched command did.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    Damaged(DamageOutcome),
    /// HP or MP actually restored.
    Restored(u32),
    Cast(CastOutcome),
    Experience(LevelUpReport),
    Gold(u32),
    Equipment {
        displaced: Option<Arc<Equipment>>,
    },
    Paused(bool),
    Reset,
}
