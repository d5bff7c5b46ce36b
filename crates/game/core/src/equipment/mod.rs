//! Equipment definitions.
//!
//! An [`Equipment`] is an immutable bundle of modifiers authored as content.
//! Characters reference equipment through shared [`Arc`](std::sync::Arc)
//! handles held in [`EquipmentSlots`]; the same definition may be worn by
//! several characters or kept in a catalog at the same time.

mod slots;

pub use slots::{EquipmentSlot, EquipmentSlots};

use crate::ids::EquipmentId;
use crate::magic::PrincipleType;

/// Equipment category. Each category occupies exactly one slot.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum EquipmentType {
    Staff,
    Robe,
    Ring,
    Brooch,
}

impl EquipmentType {
    /// Slot this equipment type is worn in.
    pub const fn slot(self) -> EquipmentSlot {
        match self {
            Self::Staff => EquipmentSlot::Staff,
            Self::Robe => EquipmentSlot::Robe,
            Self::Ring => EquipmentSlot::Ring,
            Self::Brooch => EquipmentSlot::Brooch,
        }
    }
}

/// A wearable modifier bundle.
///
/// All modifiers are fractions or per-second amounts and default to zero.
/// None of them are clamped: a robe with `damage_reduction = 1.5` is legal
/// content, and aggregation sums it as-is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub kind: EquipmentType,

    /// Fraction of incoming damage removed (0.1 = 10% less damage).
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_reduction: f32,

    /// MP regenerated per second on top of the base rate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mp_regen_bonus: f32,

    /// Fractional increase of spell range (0.2 = 20% further).
    #[cfg_attr(feature = "serde", serde(default))]
    pub range_bonus: f32,

    /// Fractional increase of projectile speed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub projectile_speed_bonus: f32,

    /// Principle whose spells receive `principle_damage_bonus`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_principle: PrincipleType,

    /// Fractional damage increase for spells that use `target_principle`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub principle_damage_bonus: f32,
}

impl Equipment {
    /// Creates a builder for an equipment definition with all modifiers at zero.
    pub fn builder(
        id: impl Into<EquipmentId>,
        name: impl Into<String>,
        kind: EquipmentType,
    ) -> EquipmentBuilder {
        EquipmentBuilder {
            equipment: Equipment {
                id: id.into(),
                name: name.into(),
                kind,
                damage_reduction: 0.0,
                mp_regen_bonus: 0.0,
                range_bonus: 0.0,
                projectile_speed_bonus: 0.0,
                target_principle: PrincipleType::None,
                principle_damage_bonus: 0.0,
            },
        }
    }

    /// Slot this item is worn in.
    pub const fn slot(&self) -> EquipmentSlot {
        self.kind.slot()
    }

    /// Whether this item boosts spells built on `principle`.
    ///
    /// `PrincipleType::None` is a sentinel and never matches anything.
    pub fn boosts(&self, principle: PrincipleType) -> bool {
        self.target_principle != PrincipleType::None && self.target_principle == principle
    }
}

/// Builder for [`Equipment`].
pub struct EquipmentBuilder {
    equipment: Equipment,
}

impl EquipmentBuilder {
    pub fn damage_reduction(mut self, value: f32) -> Self {
        self.equipment.damage_reduction = value;
        self
    }

    pub fn mp_regen_bonus(mut self, value: f32) -> Self {
        self.equipment.mp_regen_bonus = value;
        self
    }

    pub fn range_bonus(mut self, value: f32) -> Self {
        self.equipment.range_bonus = value;
        self
    }

    pub fn projectile_speed_bonus(mut self, value: f32) -> Self {
        self.equipment.projectile_speed_bonus = value;
        self
    }

    /// Boost spells of `principle` by `bonus` (0.25 = 25% more damage).
    pub fn principle_bonus(mut self, principle: PrincipleType, bonus: f32) -> Self {
        self.equipment.target_principle = principle;
        self.equipment.principle_damage_bonus = bonus;
        self
    }

    pub fn build(self) -> Equipment {
        self.equipment
    }
}
