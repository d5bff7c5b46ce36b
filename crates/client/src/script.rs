//! Scripted input for the headless client.

use game_core::{EquipmentId, MagicId};
use runtime::Command;

/// One scripted input.
///
/// Content is referenced by id and resolved against the registry when the
/// step runs.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Equip(EquipmentId),
    Learn(MagicId),
    Tick { seconds: f32 },
    Run(Command),
}

impl Step {
    pub fn equip(id: &str) -> Self {
        Self::Equip(EquipmentId::from(id))
    }

    pub fn learn(id: &str) -> Self {
        Self::Learn(MagicId::from(id))
    }

    pub fn cast(id: &str) -> Self {
        Self::Run(Command::CastMagic(MagicId::from(id)))
    }
}

/// A short session exercising every system against the sample data.
pub fn demo() -> Vec<Step> {
    vec![
        Step::equip("ember_staff"),
        Step::equip("apprentice_robe"),
        Step::equip("ring_of_flow"),
        Step::learn("fireball"),
        Step::learn("chain_lightning"),
        Step::cast("fireball"),
        Step::cast("fireball"),
        Step::cast("chain_lightning"),
        Step::Run(Command::TakeDamage(40)),
        Step::Tick { seconds: 5.0 },
        Step::Run(Command::AddExperience(250)),
        Step::Run(Command::GrantLevel),
        Step::Run(Command::AddGold(50)),
        Step::Run(Command::SpendGold(30)),
        Step::Run(Command::TogglePause),
        // rejected while paused
        Step::Run(Command::Heal(10)),
        Step::Tick { seconds: 5.0 },
        Step::Run(Command::TogglePause),
        Step::Run(Command::Heal(25)),
        Step::cast("unknown_spell"),
        Step::cast("fireball"),
    ]
}
