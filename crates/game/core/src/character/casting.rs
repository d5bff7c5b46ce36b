//! Equipped spells and the cast transaction.

use crate::error::CastError;
use crate::ids::MagicId;
use crate::magic::{Magic, ProficiencyGain};

use super::Character;

/// Result of a successful cast.
///
/// Damage, range and speed are computed with the proficiency the spell had
/// when it was cast, before the cast's own proficiency gain.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastOutcome {
    pub magic: MagicId,
    pub mp_spent: u32,
    pub damage: f32,
    pub range: f32,
    pub projectile_speed: f32,
    pub proficiency: ProficiencyGain,
}

impl Character {
    /// Adds a spell to the equipped list, replacing any spell with the same id.
    ///
    /// Returns the replaced spell (including its proficiency) if there was one.
    pub fn learn_magic(&mut self, magic: Magic) -> Option<Magic> {
        match self.magics.iter_mut().find(|known| known.id == magic.id) {
            Some(known) => Some(std::mem::replace(known, magic)),
            None => {
                self.magics.push(magic);
                None
            }
        }
    }

    /// Removes a spell from the equipped list, keeping the order of the rest.
    pub fn forget_magic(&mut self, id: &MagicId) -> Option<Magic> {
        let index = self.magics.iter().position(|known| &known.id == id)?;
        Some(self.magics.remove(index))
    }

    pub fn find_magic(&self, id: &MagicId) -> Option<&Magic> {
        self.magics.iter().find(|known| &known.id == id)
    }

    /// Casts an equipped spell.
    ///
    /// The MP cost is taken at the spell's current proficiency. Only when the
    /// MP is paid does the spell gain proficiency experience; a failed cast
    /// changes nothing.
    pub fn cast_magic(&mut self, id: &MagicId) -> Result<CastOutcome, CastError> {
        let index = self
            .magics
            .iter()
            .position(|known| &known.id == id)
            .ok_or_else(|| CastError::UnknownMagic(id.clone()))?;

        let magic = &self.magics[index];
        let cost = magic.final_mp_cost();
        let damage = self.final_magic_damage(magic);
        let range = self.final_magic_range(magic);
        let projectile_speed = self.final_projectile_speed(magic);

        self.use_mp(cost)
            .map_err(|source| CastError::InsufficientMp {
                magic: id.clone(),
                source,
            })?;

        let level = self.level;
        let proficiency = self.magics[index].add_proficiency_exp(level);

        Ok(CastOutcome {
            magic: id.clone(),
            mp_spent: cost,
            damage,
            range,
            projectile_speed,
            proficiency,
        })
    }
}
