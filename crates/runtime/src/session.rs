//! Progression controller.
//!
//! [`GameSession`] owns the character and is the only place where gameplay
//! operations are combined into transactions: ticking time, casting spells,
//! converting experience into levels, pausing. Every mutation is published on
//! the [`EventBus`] after it happens.

use std::sync::Arc;

use game_core::{
    CastOutcome, Character, DamageOutcome, Equipment, EquipmentSlot, ExperienceTable, GameConfig,
    LevelUpReport, Magic, MagicId,
};
use tokio::sync::broadcast;

use crate::api::{Command, CommandOutcome, Result, RuntimeError, StatusView};
use crate::config::RuntimeConfig;
use crate::events::{
    Event, EventBus, MagicEvent, ProgressionEvent, SessionEvent, Topic, VitalsEvent,
};
use crate::snapshot::SessionSnapshot;

#[derive(Debug)]
pub struct GameSession {
    character: Character,
    paused: bool,
    config: GameConfig,
    events: EventBus,
}

impl GameSession {
    /// Starts a new game with the default character.
    pub fn new(config: &RuntimeConfig) -> Self {
        Self::with_character(Character::new_game(), config)
    }

    pub fn with_character(character: Character, config: &RuntimeConfig) -> Self {
        Self {
            character,
            paused: false,
            config: config.game_config.clone(),
            events: EventBus::with_capacity(config.event_buffer_size),
        }
    }

    /// Resumes a session from a snapshot.
    ///
    /// Fails with [`RuntimeError::InvalidState`] when the character breaks an
    /// invariant (zero level, HP or MP above maximum, bad proficiency).
    pub fn restore(snapshot: SessionSnapshot, config: &RuntimeConfig) -> Result<Self> {
        snapshot.character.validate()?;
        let mut session = Self::with_character(snapshot.character, config);
        session.paused = snapshot.paused;
        tracing::info!(
            character = %session.character.id,
            level = session.character.level,
            paused = session.paused,
            "Session restored"
        );
        session.events.publish(SessionEvent::Restored);
        Ok(session)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            character: self.character.clone(),
            paused: self.paused,
        }
    }

    // ===== read side =====

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Experience needed to leave the current level.
    pub fn required_exp(&self) -> u32 {
        self.config.exp_curve.required_exp(self.character.level)
    }

    pub fn status(&self) -> StatusView {
        StatusView::new(&self.character, &self.config, self.paused)
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    // ===== time =====

    /// Advances the session by `dt` seconds.
    ///
    /// Does nothing while paused. Otherwise regenerates MP if it is not full.
    /// Returns the MP restored.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.paused || self.character.mp.is_full() {
            return 0;
        }

        let amount = self.character.regenerate_mp(dt);
        if amount > 0 {
            tracing::debug!(amount, mp = self.character.mp.current, "MP regenerated");
            self.events.publish(VitalsEvent::MpRegenerated {
                amount,
                mp: self.character.mp.current,
            });
        }
        amount
    }

    // ===== pause =====

    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused)
    }

    pub fn set_paused(&mut self, paused: bool) -> bool {
        if self.paused != paused {
            self.paused = paused;
            tracing::info!(paused, "Pause state changed");
            self.events.publish(SessionEvent::PauseChanged { paused });
        }
        self.paused
    }

    // ===== progression =====

    /// Adds experience and applies every level-up it pays for.
    pub fn add_experience(&mut self, amount: u32) -> LevelUpReport {
        let report = self
            .character
            .add_experience(amount, &self.config.exp_curve);

        self.events.publish(ProgressionEvent::ExperienceGained {
            amount,
            exp: self.character.exp,
            required_exp: self.required_exp(),
        });

        for level in (report.from_level + 1)..=report.to_level {
            tracing::info!(level, "Level up");
            self.events.publish(ProgressionEvent::LevelUp { level });
        }

        report
    }

    /// Grants exactly the experience needed for the next level.
    pub fn grant_level(&mut self) -> LevelUpReport {
        let amount = self.required_exp();
        tracing::debug!(amount, "Granting a level");
        self.add_experience(amount)
    }

    // ===== magic =====

    pub fn learn_magic(&mut self, magic: Magic) -> Option<Magic> {
        tracing::debug!(magic = %magic.id, "Magic learned");
        self.character.learn_magic(magic)
    }

    /// Casts an equipped spell.
    ///
    /// Unknown spells and unaffordable casts fail without touching MP or
    /// proficiency.
    pub fn use_magic(&mut self, id: &MagicId) -> Result<CastOutcome> {
        let outcome = match self.character.cast_magic(id) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::debug!(magic = %id, error = %err, "Cast rejected");
                self.events.publish(MagicEvent::CastRejected {
                    magic: id.clone(),
                    reason: err.to_string(),
                });
                return Err(err.into());
            }
        };

        tracing::info!(
            magic = %id,
            mp_spent = outcome.mp_spent,
            damage = outcome.damage,
            "Magic cast"
        );
        self.events.publish(VitalsEvent::MpSpent {
            amount: outcome.mp_spent,
            mp: self.character.mp.current,
        });
        self.events.publish(MagicEvent::Cast(outcome.clone()));

        if outcome.proficiency.leveled_up() {
            tracing::info!(
                magic = %id,
                level = outcome.proficiency.level,
                "Proficiency level up"
            );
            self.events.publish(MagicEvent::ProficiencyLevelUp {
                magic: id.clone(),
                level: outcome.proficiency.level,
            });
        }

        Ok(outcome)
    }

    // ===== vitals =====

    pub fn take_damage(&mut self, raw: u32) -> DamageOutcome {
        let outcome = self.character.take_damage(raw);
        tracing::debug!(
            raw,
            effective = outcome.effective,
            hp = outcome.hp_after,
            "Damage taken"
        );
        if outcome.is_fatal() {
            tracing::info!(character = %self.character.id, "Character fell");
        }
        self.events.publish(VitalsEvent::Damaged(outcome));
        outcome
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = self.character.heal(amount);
        self.events.publish(VitalsEvent::Healed {
            amount: restored,
            hp: self.character.hp.current,
        });
        restored
    }

    pub fn recover_mp(&mut self, amount: u32) -> u32 {
        let restored = self.character.recover_mp(amount);
        self.events.publish(VitalsEvent::MpRecovered {
            amount: restored,
            mp: self.character.mp.current,
        });
        restored
    }

    // ===== gold =====

    pub fn add_gold(&mut self, amount: u32) -> u32 {
        let before = self.character.gold;
        self.character.add_gold(amount);
        let gold = self.character.gold;
        tracing::info!(amount, gold, "Gold gained");
        self.events.publish(VitalsEvent::GoldChanged {
            gold,
            delta: i64::from(gold) - i64::from(before),
        });
        gold
    }

    pub fn spend_gold(&mut self, amount: u32) -> Result<u32> {
        if let Err(err) = self.character.spend_gold(amount) {
            tracing::debug!(amount, error = %err, "Purchase rejected");
            return Err(err.into());
        }
        let gold = self.character.gold;
        tracing::info!(amount, gold, "Gold spent");
        self.events.publish(VitalsEvent::GoldChanged {
            gold,
            delta: -i64::from(amount),
        });
        Ok(gold)
    }

    // ===== equipment =====

    pub fn equip(&mut self, item: Arc<Equipment>) -> Option<Arc<Equipment>> {
        let slot = item.slot();
        let id = item.id.clone();
        let displaced = self.character.equip(item);

        tracing::info!(item = %id, %slot, "Equipped");
        self.events.publish(SessionEvent::Equipped {
            slot,
            item: id,
            displaced: displaced.as_ref().map(|old| old.id.clone()),
        });
        displaced
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Arc<Equipment>> {
        let removed = self.character.unequip(slot)?;
        tracing::info!(item = %removed.id, %slot, "Unequipped");
        self.events.publish(SessionEvent::Unequipped {
            slot,
            item: removed.id.clone(),
        });
        Some(removed)
    }

    // ===== lifecycle =====

    /// Replaces the character with a fresh new-game character.
    ///
    /// The pause flag is cleared too: a reset session always starts running,
    /// even if it was paused when the reset came in.
    pub fn reset(&mut self) {
        self.character = Character::new_game();
        self.paused = false;
        tracing::info!("Session reset");
        self.events.publish(SessionEvent::Reset);
    }

    /// Input-layer entry point.
    ///
    /// While paused only pause commands are accepted; everything else fails
    /// with [`RuntimeError::Paused`] and changes nothing.
    pub fn dispatch(&mut self, command: Command) -> Result<CommandOutcome> {
        if self.paused && !command.bypasses_pause() {
            tracing::debug!(?command, "Command rejected while paused");
            return Err(RuntimeError::Paused);
        }

        let outcome = match command {
            Command::TakeDamage(raw) => CommandOutcome::Damaged(self.take_damage(raw)),
            Command::Heal(amount) => CommandOutcome::Restored(self.heal(amount)),
            Command::RecoverMp(amount) => CommandOutcome::Restored(self.recover_mp(amount)),
            Command::CastMagic(id) => CommandOutcome::Cast(self.use_magic(&id)?),
            Command::AddExperience(amount) => {
                CommandOutcome::Experience(self.add_experience(amount))
            }
            Command::GrantLevel => CommandOutcome::Experience(self.grant_level()),
            Command::AddGold(amount) => CommandOutcome::Gold(self.add_gold(amount)),
            Command::SpendGold(amount) => CommandOutcome::Gold(self.spend_gold(amount)?),
            Command::Equip(item) => CommandOutcome::Equipment {
                displaced: self.equip(item),
            },
            Command::Unequip(slot) => CommandOutcome::Equipment {
                displaced: self.unequip(slot),
            },
            Command::TogglePause => CommandOutcome::Paused(self.toggle_pause()),
            Command::SetPaused(paused) => CommandOutcome::Paused(self.set_paused(paused)),
            Command::Reset => {
                self.reset();
                CommandOutcome::Reset
            }
        };

        Ok(outcome)
    }
}
