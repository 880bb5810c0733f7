use crate::areas::AreaSet;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PluginConfigInner {
    /// Feature areas the plugin serves. Accepts a single name or a list.
    pub areas: AreaSet,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct PluginConfig {
    #[serde(flatten, default)]
    inner: Arc<PluginConfigInner>,
}

impl Deref for PluginConfig {
    type Target = PluginConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PluginConfig {
    fn deref_mut(&mut self) -> &mut PluginConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logger settings, mapped onto the logger builder by the facade.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub name: String,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    pub console: bool,
    pub json: bool,
    /// Directory for rolling log files; file logging is off when unset.
    pub directory: Option<PathBuf>,
    /// Extra directives such as `skyfleet_kernel=debug`.
    pub filter: Option<String>,
    /// One of `minutely`, `hourly`, `daily`, `never`.
    pub rotation: String,
    pub max_files: usize,
}

// --- Default ---

impl Default for PluginConfigInner {
    fn default() -> Self {
        Self { areas: AreaSet::ALL, logging: LoggingConfig::default() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: "skyfleet".to_owned(),
            level: "info".to_owned(),
            console: true,
            json: false,
            directory: None,
            filter: None,
            rotation: "daily".to_owned(),
            max_files: 10,
        }
    }
}
