//! Headless client driving a magecraft session.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ ContentRegistry (equipment and spell definitions)
//!   └─→ GameSession (progression controller + event bus)
//! ```
//!
//! The client resolves content ids, feeds scripted steps into the session
//! and logs every event the session publishes.

mod builder;
pub mod logging;
pub mod script;

pub use builder::ClientBuilder;
pub use script::Step;

use std::collections::HashMap;

use anyhow::{Context, Result};
use game_content::ContentRegistry;
use runtime::{Event, GameSession, StatusView, Topic};
use tokio::sync::broadcast::{Receiver, error::TryRecvError};

pub struct Client {
    registry: ContentRegistry,
    session: GameSession,
    subscriptions: HashMap<Topic, Receiver<Event>>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    fn new(registry: ContentRegistry, session: GameSession) -> Self {
        let subscriptions = session.events().subscribe_multiple(&Topic::ALL);
        Self {
            registry,
            session,
            subscriptions,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    /// Runs one step.
    ///
    /// Gameplay rejections (paused, not enough MP or gold, unknown spell) are
    /// logged and the script continues. Ids missing from the content registry
    /// are errors.
    pub fn step(&mut self, step: Step) -> Result<()> {
        match step {
            Step::Equip(id) => {
                let item = self
                    .registry
                    .equipment(&id)
                    .with_context(|| format!("Unknown equipment id: {id}"))?;
                self.session.equip(item);
            }
            Step::Learn(id) => {
                let magic = self
                    .registry
                    .magic(&id)
                    .with_context(|| format!("Unknown magic id: {id}"))?;
                self.session.learn_magic(magic);
            }
            Step::Tick { seconds } => {
                self.session.tick(seconds);
            }
            Step::Run(command) => {
                if let Err(e) = self.session.dispatch(command) {
                    tracing::warn!(severity = e.severity().as_str(), "Command rejected: {}", e);
                }
            }
        }

        self.log_events();
        Ok(())
    }

    /// Runs a whole script and returns the final status.
    pub fn run(&mut self, steps: impl IntoIterator<Item = Step>) -> Result<StatusView> {
        for step in steps {
            self.step(step)?;
        }
        Ok(self.session.status())
    }

    fn log_events(&mut self) {
        for (topic, rx) in self.subscriptions.iter_mut() {
            loop {
                match rx.try_recv() {
                    Ok(event) => tracing::debug!(?topic, ?event, "Event"),
                    Err(TryRecvError::Lagged(skipped)) => {
                        tracing::warn!(?topic, skipped, "Event subscriber lagged")
                    }
                    Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                }
            }
        }
    }
}
