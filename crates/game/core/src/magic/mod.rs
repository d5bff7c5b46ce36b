//! Spell definitions.
//!
//! A [`Magic`] combines principles (what it manipulates), a form (how it is
//! delivered) and effects (what it does) with a set of base numbers. Only the
//! principles take part in formulas; form and effects are carried for the
//! presentation layer.
//!
//! Derived values (`final_damage`, `final_mp_cost`) are recomputed from the
//! stored base stats and [`Proficiency`] on every call and never cached.

mod proficiency;

pub use proficiency::{
    BASE_CAST_EXP, CASTER_LEVEL_FACTOR, DAMAGE_MODIFIER, INITIAL_NEXT_EXP, MP_COST_MODIFIER,
    NEXT_EXP_SCALER, Proficiency, ProficiencyGain,
};

use crate::ids::MagicId;

/// The physical principle a spell manipulates.
///
/// `None` is a sentinel: it may appear in content but never matches an
/// equipment principle bonus.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PrincipleType {
    #[default]
    None,
    /// Controls molecular motion; ignites or freezes.
    ThermalControl,
    /// Controls motion vectors; gusts and impacts.
    KineticControl,
    /// Controls atomic bonds; walls and hardening.
    StructuralControl,
    /// Controls electromagnetic fields; lightning and lasers.
    ElectromagneticControl,
}

/// Delivery shape of a spell. Cosmetic.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FormType {
    #[default]
    None,
    Sphere,
    Spear,
    Wall,
    Explosion,
    Chain,
}

/// What a spell does to its target. Cosmetic.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectType {
    #[default]
    None,
    Damage,
    Heal,
    Movement,
    ApplyBuff,
    ApplyDebuff,
    Generate,
}

/// A spell definition plus its mastery state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Magic {
    pub id: MagicId,
    pub name: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub principles: Vec<PrincipleType>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub form: FormType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<EffectType>,

    #[cfg_attr(feature = "serde", serde(default = "defaults::base_damage"))]
    pub base_damage: f32,
    #[cfg_attr(feature = "serde", serde(default = "defaults::base_mp_cost"))]
    pub base_mp_cost: u32,
    /// Seconds.
    #[cfg_attr(feature = "serde", serde(default = "defaults::cast_time"))]
    pub cast_time: f32,
    /// Seconds.
    #[cfg_attr(feature = "serde", serde(default = "defaults::cooldown"))]
    pub cooldown: f32,
    #[cfg_attr(feature = "serde", serde(default = "defaults::base_range"))]
    pub base_range: f32,
    #[cfg_attr(feature = "serde", serde(default = "defaults::base_speed"))]
    pub base_speed: f32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub proficiency: Proficiency,
}

impl Magic {
    pub const DEFAULT_BASE_DAMAGE: f32 = 10.0;
    pub const DEFAULT_BASE_MP_COST: u32 = 5;
    pub const DEFAULT_CAST_TIME: f32 = 1.0;
    pub const DEFAULT_COOLDOWN: f32 = 2.0;
    pub const DEFAULT_BASE_RANGE: f32 = 10.0;
    pub const DEFAULT_BASE_SPEED: f32 = 15.0;

    /// Creates a builder with the default base stats and fresh proficiency.
    pub fn builder(id: impl Into<MagicId>, name: impl Into<String>) -> MagicBuilder {
        MagicBuilder {
            magic: Magic {
                id: id.into(),
                name: name.into(),
                principles: Vec::new(),
                form: FormType::None,
                effects: Vec::new(),
                base_damage: Self::DEFAULT_BASE_DAMAGE,
                base_mp_cost: Self::DEFAULT_BASE_MP_COST,
                cast_time: Self::DEFAULT_CAST_TIME,
                cooldown: Self::DEFAULT_COOLDOWN,
                base_range: Self::DEFAULT_BASE_RANGE,
                base_speed: Self::DEFAULT_BASE_SPEED,
                proficiency: Proficiency::new(),
            },
        }
    }

    /// Whether this spell draws on `principle`. `None` never matches.
    pub fn uses_principle(&self, principle: PrincipleType) -> bool {
        principle != PrincipleType::None && self.principles.contains(&principle)
    }

    /// `base_damage × (1 + 0.05 × ln(proficiency + 1))`.
    pub fn final_damage(&self) -> f32 {
        self.proficiency.damage(self.base_damage)
    }

    /// `max(1, ceil(base_mp_cost × (1 − 0.03 × ln(proficiency + 1))))`.
    pub fn final_mp_cost(&self) -> u32 {
        self.proficiency.mp_cost(self.base_mp_cost)
    }

    /// Grants the proficiency experience of one cast by a caster of `player_level`.
    pub fn add_proficiency_exp(&mut self, player_level: u32) -> ProficiencyGain {
        self.proficiency.add_cast_exp(player_level)
    }
}

/// Fallbacks for base stats omitted from content files.
#[cfg(feature = "serde")]
mod defaults {
    use super::Magic;

    pub(super) fn base_damage() -> f32 {
        Magic::DEFAULT_BASE_DAMAGE
    }

    pub(super) fn base_mp_cost() -> u32 {
        Magic::DEFAULT_BASE_MP_COST
    }

    pub(super) fn cast_time() -> f32 {
        Magic::DEFAULT_CAST_TIME
    }

    pub(super) fn cooldown() -> f32 {
        Magic::DEFAULT_COOLDOWN
    }

    pub(super) fn base_range() -> f32 {
        Magic::DEFAULT_BASE_RANGE
    }

    pub(super) fn base_speed() -> f32 {
        Magic::DEFAULT_BASE_SPEED
    }
}

/// Builder for [`Magic`].
pub struct MagicBuilder {
    magic: Magic,
}

impl MagicBuilder {
    pub fn principle(mut self, principle: PrincipleType) -> Self {
        self.magic.principles.push(principle);
        self
    }

    pub fn form(mut self, form: FormType) -> Self {
        self.magic.form = form;
        self
    }

    pub fn effect(mut self, effect: EffectType) -> Self {
        self.magic.effects.push(effect);
        self
    }

    pub fn base_damage(mut self, value: f32) -> Self {
        self.magic.base_damage = value;
        self
    }

    pub fn base_mp_cost(mut self, value: u32) -> Self {
        self.magic.base_mp_cost = value;
        self
    }

    pub fn cast_time(mut self, seconds: f32) -> Self {
        self.magic.cast_time = seconds;
        self
    }

    pub fn cooldown(mut self, seconds: f32) -> Self {
        self.magic.cooldown = seconds;
        self
    }

    pub fn base_range(mut self, value: f32) -> Self {
        self.magic.base_range = value;
        self
    }

    pub fn base_speed(mut self, value: f32) -> Self {
        self.magic.base_speed = value;
        self
    }

    pub fn proficiency(mut self, proficiency: Proficiency) -> Self {
        self.magic.proficiency = proficiency;
        self
    }

    pub fn build(self) -> Magic {
        self.magic
    }
}
