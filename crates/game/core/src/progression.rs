//! Character experience curve.
//!
//! The experience needed to advance from one level to the next is provided by
//! an [`ExperienceTable`]. Callers pick the curve; the rules engine only
//! requires that every threshold is at least 1 so the leveling loop ends.

/// Provides the experience needed to advance from `level` to `level + 1`.
pub trait ExperienceTable {
    fn required_exp(&self, level: u32) -> u32;
}

/// Built-in experience curves, selectable from configuration.
///
/// ```text
/// Geometric: floor(base × growth^(level − 1))
/// Linear:    base + step × (level − 1)
/// Constant:  amount
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ExpCurve {
    Geometric { base: u32, growth: f32 },
    Linear { base: u32, step: u32 },
    Constant { amount: u32 },
}

impl ExpCurve {
    pub const DEFAULT_BASE: u32 = 100;
    pub const DEFAULT_GROWTH: f32 = 1.2;

    pub const fn geometric(base: u32, growth: f32) -> Self {
        Self::Geometric { base, growth }
    }

    pub const fn linear(base: u32, step: u32) -> Self {
        Self::Linear { base, step }
    }

    pub const fn constant(amount: u32) -> Self {
        Self::Constant { amount }
    }
}

impl Default for ExpCurve {
    /// 100 experience for level 2, growing 20% per level.
    fn default() -> Self {
        Self::geometric(Self::DEFAULT_BASE, Self::DEFAULT_GROWTH)
    }
}

impl ExperienceTable for ExpCurve {
    fn required_exp(&self, level: u32) -> u32 {
        let steps = level.saturating_sub(1);
        let required = match *self {
            Self::Geometric { base, growth } => {
                let exponent = i32::try_from(steps).unwrap_or(i32::MAX);
                (base as f32 * growth.powi(exponent)) as u32
            }
            Self::Linear { base, step } => base.saturating_add(step.saturating_mul(steps)),
            Self::Constant { amount } => amount,
        };
        required.max(1)
    }
}

impl<T: ExperienceTable + ?Sized> ExperienceTable for &T {
    fn required_exp(&self, level: u32) -> u32 {
        (**self).required_exp(level)
    }
}

/// Outcome of adding character experience.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpReport {
    pub gained: u32,
    pub from_level: u32,
    pub to_level: u32,
    /// Experience carried toward the next level.
    pub remaining_exp: u32,
}

impl LevelUpReport {
    pub const fn levels_gained(&self) -> u32 {
        self.to_level - self.from_level
    }
}
