//! Client builder with dependency injection pattern.

use std::path::PathBuf;

use anyhow::{Context, Result};
use game_content::ContentRegistry;
use runtime::{GameSession, RuntimeConfig};

use crate::Client;

/// Builder for constructing a [`Client`].
///
/// Content is loaded from the configured data directory unless a registry is
/// injected directly. The registry's `game.toml` settings replace the
/// runtime config's game rules.
#[derive(Default)]
pub struct ClientBuilder {
    config: RuntimeConfig,
    data_dir: Option<PathBuf>,
    registry: Option<ContentRegistry>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the data directory from the runtime config.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Uses already-loaded content instead of reading the data directory.
    pub fn registry(mut self, registry: ContentRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn build(self) -> Result<Client> {
        let Self {
            config,
            data_dir,
            registry,
        } = self;

        let registry = match registry {
            Some(registry) => registry,
            None => {
                let dir = data_dir.unwrap_or_else(|| config.data_dir.clone());
                tracing::debug!("Loading content from {}", dir.display());
                ContentRegistry::from_dir(&dir)
                    .with_context(|| format!("Failed to load content from {}", dir.display()))?
            }
        };

        tracing::info!(
            equipment = registry.equipment_count(),
            magic = registry.magic_count(),
            "Content loaded"
        );

        let config = config.with_game_config(registry.config().clone());
        let session = GameSession::new(&config);

        Ok(Client::new(registry, session))
    }
}
