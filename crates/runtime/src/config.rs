//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

use crate::events::EventBus;

/// Configuration for a [`GameSession`](crate::GameSession).
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Per-topic broadcast buffer.
    pub event_buffer_size: usize,
    /// Directory holding `equipment.ron`, `magic.ron` and `game.toml`.
    pub data_dir: PathBuf,
}

impl RuntimeConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAGECRAFT_DATA_DIR` - Content directory (default: `data`)
    /// - `MAGECRAFT_EVENT_BUFFER` - Event buffer per topic (default: 100)
    ///
    /// `game_config` is left at its default; load it from the data directory.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("MAGECRAFT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(capacity) = read_env::<usize>("MAGECRAFT_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }

    pub fn with_game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = game_config;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: EventBus::DEFAULT_CAPACITY,
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
