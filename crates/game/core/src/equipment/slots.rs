//! Equipment slots worn by a character.
//!
//! Slots hold shared handles to content definitions. The character never owns
//! the definition's lifetime; unequipping simply drops the handle.

use std::sync::Arc;

use super::Equipment;

/// One of the four wearable positions.
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
pub enum EquipmentSlot {
    Staff,
    Robe,
    Ring,
    Brooch,
}

/// The four optional equipment slots of a character.
///
/// Every aggregate query iterates the present slots only, so an empty slot is
/// "no contribution" rather than a fault.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentSlots {
    pub staff: Option<Arc<Equipment>>,
    pub robe: Option<Arc<Equipment>>,
    pub ring: Option<Arc<Equipment>>,
    pub brooch: Option<Arc<Equipment>>,
}

impl EquipmentSlots {
    /// Creates empty slots.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the item in `slot`, if any.
    pub fn get(&self, slot: EquipmentSlot) -> Option<&Arc<Equipment>> {
        self.slot_ref(slot).as_ref()
    }

    /// Puts `item` into the slot matching its type, returning the displaced item.
    pub fn equip(&mut self, item: Arc<Equipment>) -> Option<Arc<Equipment>> {
        self.slot_mut(item.slot()).replace(item)
    }

    /// Empties `slot`, returning the item that was worn there.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Arc<Equipment>> {
        self.slot_mut(slot).take()
    }

    /// Iterates the worn items in slot order (staff, robe, ring, brooch).
    pub fn iter(&self) -> impl Iterator<Item = &Equipment> {
        [&self.staff, &self.robe, &self.ring, &self.brooch]
            .into_iter()
            .filter_map(|slot| slot.as_deref())
    }

    /// Number of occupied slots.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Sum of `damage_reduction` over worn items. Not clamped.
    pub fn total_damage_reduction(&self) -> f32 {
        self.iter().map(|eq| eq.damage_reduction).sum()
    }

    /// Sum of `mp_regen_bonus` over worn items.
    pub fn total_mp_regen_bonus(&self) -> f32 {
        self.iter().map(|eq| eq.mp_regen_bonus).sum()
    }

    /// Sum of `range_bonus` over worn items.
    pub fn total_range_bonus(&self) -> f32 {
        self.iter().map(|eq| eq.range_bonus).sum()
    }

    /// Sum of `projectile_speed_bonus` over worn items.
    pub fn total_projectile_speed_bonus(&self) -> f32 {
        self.iter().map(|eq| eq.projectile_speed_bonus).sum()
    }

    fn slot_ref(&self, slot: EquipmentSlot) -> &Option<Arc<Equipment>> {
        match slot {
            EquipmentSlot::Staff => &self.staff,
            EquipmentSlot::Robe => &self.robe,
            EquipmentSlot::Ring => &self.ring,
            EquipmentSlot::Brooch => &self.brooch,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Arc<Equipment>> {
        match slot {
            EquipmentSlot::Staff => &mut self.staff,
            EquipmentSlot::Robe => &mut self.robe,
            EquipmentSlot::Ring => &mut self.ring,
            EquipmentSlot::Brooch => &mut self.brooch,
        }
    }
}
