//! The player character aggregate.
//!
//! [`Character`] owns vitals, wallet, experience, the four equipment slots and
//! the equipped spell list. Every mutation is a `&mut self` method that either
//! completes or returns an error without touching state, so a caller can
//! never observe a half-applied operation.

mod casting;
mod vitals;

pub use casting::CastOutcome;
pub use vitals::ResourceMeter;

use std::sync::Arc;

use crate::combat::{DamageOutcome, apply_damage, mitigate_damage};
use crate::config::GameConfig;
use crate::equipment::{Equipment, EquipmentSlot, EquipmentSlots};
use crate::error::{GoldError, ResourceError, StateError};
use crate::ids::CharacterId;
use crate::magic::Magic;
use crate::progression::{ExperienceTable, LevelUpReport};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: CharacterId,
    pub name: String,

    /// Always at least 1.
    pub level: u32,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    /// Experience toward the next level.
    pub exp: u32,
    pub gold: u32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: EquipmentSlots,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magics: Vec<Magic>,
}

impl Character {
    pub const STARTING_LEVEL: u32 = 1;
    pub const STARTING_HP: u32 = 100;
    pub const STARTING_MP: u32 = 100;
    pub const NEW_GAME_ID: &'static str = "player_001";
    pub const NEW_GAME_NAME: &'static str = "Player";
    pub const NEW_GAME_GOLD: u32 = 100;

    /// Level 1 character with full 100 HP / 100 MP and an empty purse.
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: Self::STARTING_LEVEL,
            hp: ResourceMeter::full(Self::STARTING_HP),
            mp: ResourceMeter::full(Self::STARTING_MP),
            exp: 0,
            gold: 0,
            equipment: EquipmentSlots::empty(),
            magics: Vec::new(),
        }
    }

    /// The character a new game starts with: `player_001`, 100 gold.
    pub fn new_game() -> Self {
        Self {
            gold: Self::NEW_GAME_GOLD,
            ..Self::new(Self::NEW_GAME_ID, Self::NEW_GAME_NAME)
        }
    }

    pub const fn is_alive(&self) -> bool {
        self.hp.current > 0
    }

    /// Checks the invariants every mutation above preserves.
    ///
    /// Only needed for characters that did not come from [`Character::new`],
    /// such as decoded save data.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.level < Self::STARTING_LEVEL {
            return Err(StateError::ZeroLevel);
        }
        if self.hp.current > self.hp.maximum {
            return Err(StateError::HpOverflow {
                current: self.hp.current,
                maximum: self.hp.maximum,
            });
        }
        if self.mp.current > self.mp.maximum {
            return Err(StateError::MpOverflow {
                current: self.mp.current,
                maximum: self.mp.maximum,
            });
        }

        for (index, magic) in self.magics.iter().enumerate() {
            if self.magics[..index].iter().any(|earlier| earlier.id == magic.id) {
                return Err(StateError::DuplicateMagic(magic.id.clone()));
            }
            let proficiency = &magic.proficiency;
            if proficiency.next_exp == 0 || proficiency.exp >= proficiency.next_exp {
                return Err(StateError::Proficiency {
                    magic: magic.id.clone(),
                    exp: proficiency.exp,
                    next_exp: proficiency.next_exp,
                });
            }
        }
        Ok(())
    }

    // ===== equipment =====

    /// Wears `item` in the slot of its type, returning the displaced item.
    pub fn equip(&mut self, item: Arc<Equipment>) -> Option<Arc<Equipment>> {
        self.equipment.equip(item)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Arc<Equipment>> {
        self.equipment.unequip(slot)
    }

    /// Summed damage reduction of worn equipment. Not clamped.
    pub fn total_damage_reduction(&self) -> f32 {
        self.equipment.total_damage_reduction()
    }

    /// Summed per-second MP regeneration bonus of worn equipment.
    pub fn total_mp_regen_bonus(&self) -> f32 {
        self.equipment.total_mp_regen_bonus()
    }

    /// Spell damage after proficiency and principle-matched equipment bonuses.
    ///
    /// Bonuses of matching items are added to a single multiplier starting at
    /// 1.0; they do not compound with each other.
    pub fn final_magic_damage(&self, magic: &Magic) -> f32 {
        let multiplier = self
            .equipment
            .iter()
            .filter(|eq| magic.uses_principle(eq.target_principle))
            .fold(1.0f32, |acc, eq| acc + eq.principle_damage_bonus);
        magic.final_damage() * multiplier
    }

    /// Spell range after every worn item's range bonus (not principle gated).
    pub fn final_magic_range(&self, magic: &Magic) -> f32 {
        magic.base_range * (1.0 + self.equipment.total_range_bonus())
    }

    /// Projectile speed after every worn item's speed bonus.
    pub fn final_projectile_speed(&self, magic: &Magic) -> f32 {
        magic.base_speed * (1.0 + self.equipment.total_projectile_speed_bonus())
    }

    // ===== vitals =====

    /// Applies a hit after equipment mitigation.
    pub fn take_damage(&mut self, raw: u32) -> DamageOutcome {
        let effective = mitigate_damage(raw, self.total_damage_reduction());
        let before = self.hp.current;
        self.hp.current = apply_damage(before, effective);

        DamageOutcome {
            raw,
            effective,
            hp_lost: before - self.hp.current,
            hp_after: self.hp.current,
        }
    }

    /// Restores HP up to the maximum. Returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp.restore(amount)
    }

    /// Spends `amount` MP, or fails without changing anything.
    pub fn use_mp(&mut self, amount: u32) -> Result<(), ResourceError> {
        if self.mp.try_consume(amount) {
            Ok(())
        } else {
            Err(ResourceError::InsufficientMp {
                required: amount,
                available: self.mp.current,
            })
        }
    }

    /// Restores MP up to the maximum. Returns the MP actually restored.
    pub fn recover_mp(&mut self, amount: u32) -> u32 {
        self.mp.restore(amount)
    }

    /// MP a regeneration tick of `dt` seconds would yield, before capping.
    ///
    /// `trunc((1 + equipment bonus) × dt)`; negative products yield 0.
    pub fn mp_regen_amount(&self, dt: f32) -> u32 {
        ((GameConfig::BASE_MP_REGEN + self.total_mp_regen_bonus()) * dt) as u32
    }

    /// Regenerates MP for `dt` seconds. Returns the MP actually restored.
    pub fn regenerate_mp(&mut self, dt: f32) -> u32 {
        let amount = self.mp_regen_amount(dt);
        self.mp.restore(amount)
    }

    // ===== progression =====

    /// Raises the level and both maximums. Current HP/MP are not refilled.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.hp.grow(GameConfig::HP_GROWTH);
        self.mp.grow(GameConfig::MP_GROWTH);
    }

    /// Adds experience and levels up as many times as the table allows.
    ///
    /// Each level-up consumes the threshold of the level being left, then the
    /// threshold is looked up again for the new level.
    pub fn add_experience(&mut self, exp: u32, table: &impl ExperienceTable) -> LevelUpReport {
        let from_level = self.level;
        self.exp = self.exp.saturating_add(exp);

        let mut required = table.required_exp(self.level).max(1);
        while self.exp >= required {
            self.exp -= required;
            self.level_up();
            required = table.required_exp(self.level).max(1);
        }

        LevelUpReport {
            gained: exp,
            from_level,
            to_level: self.level,
            remaining_exp: self.exp,
        }
    }

    // ===== wallet =====

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Spends gold, or fails without changing anything.
    pub fn spend_gold(&mut self, amount: u32) -> Result<(), GoldError> {
        if amount > self.gold {
            return Err(GoldError::InsufficientGold {
                required: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::EquipmentType;
    use crate::ids::MagicId;
    use crate::magic::PrincipleType;
    use crate::progression::ExpCurve;

    fn armored(reduction: f32) -> Character {
        let mut hero = Character::new_game();
        hero.equip(Arc::new(
            Equipment::builder("robe", "Robe", EquipmentType::Robe)
                .damage_reduction(reduction)
                .build(),
        ));
        hero
    }

    #[test]
    fn new_game_defaults() {
        let hero = Character::new_game();
        assert_eq!(hero.id.as_str(), "player_001");
        assert_eq!(hero.level, 1);
        assert_eq!(hero.hp, ResourceMeter::full(100));
        assert_eq!(hero.mp, ResourceMeter::full(100));
        assert_eq!(hero.exp, 0);
        assert_eq!(hero.gold, 100);
        assert_eq!(hero.total_damage_reduction(), 0.0);
        assert_eq!(hero.total_mp_regen_bonus(), 0.0);
    }

    #[test]
    fn damage_is_mitigated_by_equipment() {
        let mut hero = armored(0.3);
        let outcome = hero.take_damage(100);

        assert_eq!(outcome.effective, 70);
        assert_eq!(hero.hp.current, 30);
    }

    #[test]
    fn lethal_damage_stops_at_zero() {
        let mut hero = armored(0.0);
        let outcome = hero.take_damage(250);

        assert_eq!(hero.hp.current, 0);
        assert_eq!(outcome.hp_lost, 100);
        assert!(outcome.is_fatal());
        assert!(!hero.is_alive());
    }

    #[test]
    fn over_full_mitigation_blocks_everything() {
        let mut hero = armored(1.4);
        let outcome = hero.take_damage(80);

        assert_eq!(outcome.effective, 0);
        assert_eq!(hero.hp.current, 100);
    }

    #[test]
    fn heal_caps_at_max() {
        let mut hero = Character::new_game();
        hero.take_damage(30);
        assert_eq!(hero.heal(50), 30);
        assert_eq!(hero.hp.current, 100);
    }

    #[test]
    fn use_mp_gates_on_available_mp() {
        for amount in 0..=10 {
            let mut hero = Character::new_game();
            hero.mp.current = 10;
            assert!(hero.use_mp(amount).is_ok());
            assert_eq!(hero.mp.current, 10 - amount);
        }

        let mut hero = Character::new_game();
        hero.mp.current = 10;
        assert_eq!(
            hero.use_mp(11),
            Err(ResourceError::InsufficientMp {
                required: 11,
                available: 10
            })
        );
        assert_eq!(hero.mp.current, 10);
    }

    #[test]
    fn regeneration_truncates_and_caps() {
        let mut hero = Character::new_game();
        hero.mp.current = 50;
        hero.equip(Arc::new(
            Equipment::builder("brooch", "Brooch", EquipmentType::Brooch)
                .mp_regen_bonus(1.5)
                .build(),
        ));

        // (1 + 1.5) × 0.5 = 1.25
        assert_eq!(hero.regenerate_mp(0.5), 1);
        assert_eq!(hero.mp.current, 51);
        // a frame-sized delta yields nothing
        assert_eq!(hero.regenerate_mp(0.016), 0);
        assert_eq!(hero.regenerate_mp(100.0), 49);
        assert!(hero.mp.is_full());
        assert_eq!(hero.regenerate_mp(-3.0), 0);
    }

    #[test]
    fn level_up_raises_caps_only() {
        let mut hero = Character::new_game();
        hero.take_damage(40);
        hero.level_up();

        assert_eq!(hero.level, 2);
        assert_eq!(hero.hp, ResourceMeter::new(60, 110));
        assert_eq!(hero.mp, ResourceMeter::new(100, 105));
    }

    #[test]
    fn experience_loop_handles_multiple_levels() {
        let mut hero = Character::new_game();
        let report = hero.add_experience(250, &ExpCurve::default());

        // 250 − 100 = 150, 150 − 120 = 30
        assert_eq!(report.levels_gained(), 2);
        assert_eq!(hero.level, 3);
        assert_eq!(hero.exp, 30);
        assert_eq!(hero.hp.maximum, 120);
        assert_eq!(hero.mp.maximum, 110);
    }

    #[test]
    fn experience_loop_with_constant_curve() {
        let mut hero = Character::new_game();
        let report = hero.add_experience(250, &ExpCurve::constant(100));

        assert_eq!(report.to_level, 3);
        assert_eq!(report.remaining_exp, 50);
    }

    #[test]
    fn gold_spend_is_all_or_nothing() {
        let mut hero = Character::new_game();
        hero.add_gold(20);
        assert_eq!(hero.gold, 120);

        assert!(hero.spend_gold(121).is_err());
        assert_eq!(hero.gold, 120);
        assert!(hero.spend_gold(120).is_ok());
        assert_eq!(hero.gold, 0);
    }

    #[test]
    fn principle_bonus_applies_only_to_matching_spells() {
        let mut hero = Character::new_game();
        hero.equip(Arc::new(
            Equipment::builder("staff", "Ember Staff", EquipmentType::Staff)
                .principle_bonus(PrincipleType::ThermalControl, 0.25)
                .range_bonus(0.5)
                .build(),
        ));
        hero.equip(Arc::new(
            Equipment::builder("ring", "Ember Ring", EquipmentType::Ring)
                .principle_bonus(PrincipleType::ThermalControl, 0.25)
                .build(),
        ));

        let fire = Magic::builder("fire", "Fire")
            .principle(PrincipleType::ThermalControl)
            .base_damage(20.0)
            .build();
        let gust = Magic::builder("gust", "Gust")
            .principle(PrincipleType::KineticControl)
            .base_damage(20.0)
            .build();

        // additive: 1 + 0.25 + 0.25
        assert_eq!(hero.final_magic_damage(&fire), 30.0);
        assert_eq!(hero.final_magic_damage(&gust), 20.0);
        // range is unconditional
        assert_eq!(hero.final_magic_range(&gust), 15.0);
        assert_eq!(hero.final_projectile_speed(&gust), 15.0);
    }

    #[test]
    fn fresh_characters_are_valid() {
        let mut hero = Character::new_game();
        hero.learn_magic(Magic::builder("fire", "Fire").build());
        hero.add_experience(500, &ExpCurve::default());
        assert_eq!(hero.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_broken_state() {
        let mut hero = Character::new_game();
        hero.level = 0;
        assert_eq!(hero.validate(), Err(StateError::ZeroLevel));

        let mut hero = Character::new_game();
        hero.hp = ResourceMeter {
            current: 150,
            maximum: 100,
        };
        assert_eq!(
            hero.validate(),
            Err(StateError::HpOverflow {
                current: 150,
                maximum: 100
            })
        );

        let mut hero = Character::new_game();
        let mut fire = Magic::builder("fire", "Fire").build();
        fire.proficiency.next_exp = 0;
        hero.magics.push(fire);
        assert!(matches!(
            hero.validate(),
            Err(StateError::Proficiency { next_exp: 0, .. })
        ));

        let mut hero = Character::new_game();
        hero.magics.push(Magic::builder("fire", "Fire").build());
        hero.magics.push(Magic::builder("fire", "Fire").build());
        assert_eq!(
            hero.validate(),
            Err(StateError::DuplicateMagic(MagicId::from("fire")))
        );
    }
}
