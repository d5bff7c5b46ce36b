//! Deterministic progression rules shared across clients.
//!
//! `game-core` defines the canonical rules of the magic system (equipment
//! aggregation, spell proficiency, damage mitigation, the MP economy and the
//! experience loop) as pure APIs that can be reused by the runtime, content
//! tools and tests. All state lives in [`Character`]; the runtime only
//! orchestrates calls into it.
pub mod character;
pub mod combat;
pub mod config;
pub mod equipment;
pub mod error;
pub mod ids;
pub mod magic;
pub mod progression;

pub use character::{CastOutcome, Character, ResourceMeter};
pub use combat::{DamageOutcome, apply_damage, mitigate_damage};
pub use config::GameConfig;
pub use equipment::{Equipment, EquipmentBuilder, EquipmentSlot, EquipmentSlots, EquipmentType};
pub use error::{CastError, ErrorSeverity, GameError, GoldError, ResourceError, StateError};
pub use ids::{CharacterId, EquipmentId, MagicId};
pub use magic::{
    EffectType, FormType, Magic, MagicBuilder, PrincipleType, Proficiency, ProficiencyGain,
};
pub use progression::{ExpCurve, ExperienceTable, LevelUpReport};
