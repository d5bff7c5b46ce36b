//! Per-spell proficiency.
//!
//! Proficiency is a `(level, exp, next_exp)` triple that only grows. Each cast
//! grants experience scaled by the caster's level; crossing the threshold
//! raises the proficiency level and multiplies the next threshold by 1.2.
//!
//! All arithmetic is single precision with truncation at the same points as
//! the shipped game, so balance numbers reproduce exactly.

/// Base experience granted per cast before the caster-level multiplier.
pub const BASE_CAST_EXP: f32 = 10.0;

/// Caster-level multiplier slope: gain = 10 × (1 + 0.1 × level).
pub const CASTER_LEVEL_FACTOR: f32 = 0.1;

/// Threshold growth per proficiency level.
pub const NEXT_EXP_SCALER: f32 = 1.2;

/// Threshold for the first proficiency level.
pub const INITIAL_NEXT_EXP: u32 = 100;

/// Damage bonus per unit of `ln(level + 1)`.
pub const DAMAGE_MODIFIER: f32 = 0.05;

/// MP cost reduction per unit of `ln(level + 1)`.
pub const MP_COST_MODIFIER: f32 = 0.03;

/// Mastery state of a single spell.
///
/// Invariant: `exp < next_exp` after every public mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proficiency {
    pub level: u32,
    pub exp: u32,
    pub next_exp: u32,
}

/// Outcome of a proficiency gain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProficiencyGain {
    /// Experience added by this gain.
    pub gained: u32,
    /// Number of proficiency levels crossed (may exceed one).
    pub levels_gained: u32,
    /// Proficiency level after the gain.
    pub level: u32,
}

impl ProficiencyGain {
    pub const fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

impl Proficiency {
    /// Fresh proficiency: level 0, no experience, threshold 100.
    pub const fn new() -> Self {
        Self {
            level: 0,
            exp: 0,
            next_exp: INITIAL_NEXT_EXP,
        }
    }

    /// Experience a single cast grants at the given caster level.
    ///
    /// `floor(10 × (1 + 0.1 × level))`, truncated after the multiplication.
    pub fn cast_exp(player_level: u32) -> u32 {
        (BASE_CAST_EXP * (1.0 + player_level as f32 * CASTER_LEVEL_FACTOR)) as u32
    }

    /// Grants the experience of one cast at `player_level`.
    pub fn add_cast_exp(&mut self, player_level: u32) -> ProficiencyGain {
        self.gain(Self::cast_exp(player_level))
    }

    /// Adds `amount` experience and resolves every threshold it crosses.
    ///
    /// Each level-up consumes the threshold in effect at that moment, then the
    /// threshold grows by [`NEXT_EXP_SCALER`].
    pub fn gain(&mut self, amount: u32) -> ProficiencyGain {
        self.exp = self.exp.saturating_add(amount);

        let mut levels_gained = 0;
        while self.exp >= self.next_exp {
            self.level += 1;
            self.exp -= self.next_exp;
            self.next_exp = ((self.next_exp as f32 * NEXT_EXP_SCALER) as u32).max(1);
            levels_gained += 1;
        }

        ProficiencyGain {
            gained: amount,
            levels_gained,
            level: self.level,
        }
    }

    /// `ln(level + 1)`: zero at level 0, concave afterwards.
    fn log_level(&self) -> f32 {
        (self.level as f32 + 1.0).ln()
    }

    /// Damage multiplier `1 + 0.05 × ln(level + 1)`.
    pub fn damage_multiplier(&self) -> f32 {
        1.0 + DAMAGE_MODIFIER * self.log_level()
    }

    /// Cost multiplier `1 − 0.03 × ln(level + 1)`.
    ///
    /// Not clamped here; [`Proficiency::mp_cost`] floors the resulting cost
    /// at 1 however small (or negative) this factor becomes.
    pub fn cost_multiplier(&self) -> f32 {
        1.0 - MP_COST_MODIFIER * self.log_level()
    }

    /// Final damage of a spell with `base_damage` at this proficiency.
    pub fn damage(&self, base_damage: f32) -> f32 {
        base_damage * self.damage_multiplier()
    }

    /// Final MP cost of a spell with `base_mp_cost` at this proficiency.
    pub fn mp_cost(&self, base_mp_cost: u32) -> u32 {
        let cost = (base_mp_cost as f32 * self.cost_multiplier()).ceil();
        // Negative costs saturate to 0 in the cast, then the floor applies.
        (cost as u32).max(1)
    }
}

impl Default for Proficiency {
    fn default() -> Self {
        Self::new()
    }
}
