use crate::progression::ExpCurve;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Experience curve used by the leveling loop.
    pub exp_curve: ExpCurve,

    /// HP ratio at or below which status displays flag the character as in danger.
    pub low_hp_threshold: f32,
}

impl GameConfig {
    // ===== fixed rules =====
    /// Max HP gained per character level.
    pub const HP_GROWTH: u32 = 10;
    /// Max MP gained per character level.
    pub const MP_GROWTH: u32 = 5;
    /// MP regenerated per second before equipment bonuses.
    pub const BASE_MP_REGEN: f32 = 1.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LOW_HP_THRESHOLD: f32 = 0.3;

    pub fn new() -> Self {
        Self {
            exp_curve: ExpCurve::default(),
            low_hp_threshold: Self::DEFAULT_LOW_HP_THRESHOLD,
        }
    }

    pub fn with_exp_curve(exp_curve: ExpCurve) -> Self {
        Self {
            exp_curve,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
