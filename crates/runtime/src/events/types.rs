//! Event types for different topics.

use game_core::{CastOutcome, DamageOutcome, EquipmentId, EquipmentSlot, MagicId};
use serde::{Deserialize, Serialize};

/// HP, MP and gold changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VitalsEvent {
    Damaged(DamageOutcome),
    Healed { amount: u32, hp: u32 },
    MpSpent { amount: u32, mp: u32 },
    /// Explicit MP recovery (potions, scripted restores).
    MpRecovered { amount: u32, mp: u32 },
    /// MP gained from a regeneration tick. Only published when non-zero.
    MpRegenerated { amount: u32, mp: u32 },
    GoldChanged { gold: u32, delta: i64 },
}

/// Character experience and levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProgressionEvent {
    ExperienceGained {
        amount: u32,
        exp: u32,
        required_exp: u32,
    },
    /// Published once per level gained, in order.
    LevelUp { level: u32 },
}

/// Spell casting and mastery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MagicEvent {
    Cast(CastOutcome),
    ProficiencyLevelUp { magic: MagicId, level: u32 },
    CastRejected { magic: MagicId, reason: String },
}

/// Session lifecycle and loadout changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    PauseChanged { paused: bool },
    Reset,
    Restored,
    Equipped {
        slot: EquipmentSlot,
        item: EquipmentId,
        displaced: Option<EquipmentId>,
    },
    Unequipped { slot: EquipmentSlot, item: EquipmentId },
}
