//! Session orchestration for the magecraft rules engine.
//!
//! This crate wraps a `game-core` [`Character`](game_core::Character) in a
//! [`GameSession`] that ticks time, gates input behind a pause flag, turns
//! experience into levels and publishes everything that happens on a
//! topic-based [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the progression controller
//! - [`api`] exposes the commands, status view and errors clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`snapshot`] encodes session state for save/load
//! - [`config`] reads runtime settings from the environment
pub mod api;
pub mod config;
pub mod events;
pub mod session;
pub mod snapshot;

pub use api::{Command, CommandOutcome, Result, RuntimeError, StatusView};
pub use config::RuntimeConfig;
pub use events::{
    Event, EventBus, MagicEvent, ProgressionEvent, SessionEvent, Topic, VitalsEvent,
};
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
