//! Damage mitigation and application.

/// Damage that remains after equipment mitigation.
///
/// # Formula
///
/// ```text
/// effective = max(0, raw × (1 − reduction))   // single precision
/// final     = trunc(effective)
/// ```
///
/// `reduction` is the summed equipment fraction and is not
/// clamped: anything at or above 1.0 blocks the hit entirely, and a negative
/// sum amplifies it.
pub fn mitigate_damage(raw: u32, reduction: f32) -> u32 {
    let effective = raw as f32 * (1.0 - reduction);
    if effective < 0.0 { 0 } else { effective as u32 }
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Outcome of a hit taken by a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// Damage before mitigation.
    pub raw: u32,
    /// Damage after mitigation and truncation.
    pub effective: u32,
    /// HP actually removed (`effective` capped by the HP that was left).
    pub hp_lost: u32,
    pub hp_after: u32,
}

impl DamageOutcome {
    pub const fn is_fatal(&self) -> bool {
        self.hp_after == 0 && self.hp_lost > 0
    }
}
