//! Read-only status projection for display layers.
use game_core::{Character, ExperienceTable, GameConfig};
use serde::Serialize;

/// Everything a HUD needs to draw the character panel.
///
/// Built on demand from the session; holding one never borrows the session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusView {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub hp_ratio: f32,
    pub mp: u32,
    pub max_mp: u32,
    pub mp_ratio: f32,
    pub exp: u32,
    pub required_exp: u32,
    pub gold: u32,
    pub paused: bool,
    low_hp_threshold: f32,
}

impl StatusView {
    pub fn new(character: &Character, config: &GameConfig, paused: bool) -> Self {
        Self {
            name: character.name.clone(),
            level: character.level,
            hp: character.hp.current,
            max_hp: character.hp.maximum,
            hp_ratio: character.hp.ratio(),
            mp: character.mp.current,
            max_mp: character.mp.maximum,
            mp_ratio: character.mp.ratio(),
            exp: character.exp,
            required_exp: config.exp_curve.required_exp(character.level),
            gold: character.gold,
            paused,
            low_hp_threshold: config.low_hp_threshold,
        }
    }

    /// HP at or below `threshold` of maximum.
    pub fn is_low_hp(&self, threshold: f32) -> bool {
        self.hp_ratio <= threshold
    }

    /// [`is_low_hp`](Self::is_low_hp) with the configured danger threshold.
    pub fn in_danger(&self) -> bool {
        self.is_low_hp(self.low_hp_threshold)
    }

    /// Progress toward the next level, `exp / required_exp`.
    pub fn exp_ratio(&self) -> f32 {
        self.exp as f32 / self.required_exp.max(1) as f32
    }
}
