//! Thread-safe configuration storage.
//!
//! Provides a simple in-memory config container with interior mutability.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::{Config, ConfigOverrides};

/// Thread-safe config container with interior mutability.
///
/// Shared between the UI loop and the fetch worker.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
    overrides: Arc<ConfigOverrides>,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
            overrides: Arc::new(ConfigOverrides::default()),
        }
    }

    /// Command-line values to re-apply after every reload.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = Arc::new(overrides);
        self
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Reload config from the file.
    ///
    /// On success, atomically replaces the current config.
    /// On failure, keeps the old config and returns the error.
    /// Command-line overrides are applied on top of the file. When neither
    /// sets an API key the current one is kept.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let mut config = Config::load_from(&self.path)?;
        self.overrides.apply(&mut config);
        config.validate()?;

        let mut guard = self.inner.write();
        if config.api.api_key.is_none() {
            config.api.api_key = guard.api.api_key.take();
        }
        *guard = config;
        Ok(())
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
