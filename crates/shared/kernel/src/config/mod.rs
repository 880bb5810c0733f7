use crate::error::{KernelError, KernelErrorExt};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "skyfleet";
/// Prefix of environment overrides, e.g. `SKYFLEET__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "SKYFLEET";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `skyfleet.toml`). If no path is provided, it
///    looks for `skyfleet.*` in the working directory and skips the layer when none exists.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `SKYFLEET__`.
///    Nested structures are accessed using double underscores (e.g., `SKYFLEET__LOGGING__LEVEL`
///    maps to `logging.level`).
///
/// # Type Parameters
/// * `T`: The target configuration structure. Must implement [`serde::Deserialize`].
///
/// # Errors
/// This function will return an error if:
/// * An explicitly given configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use skyfleet_kernel::config::load_config;
/// use skyfleet_kernel::domain::config::PluginConfig;
///
/// let cfg: PluginConfig = load_config(None::<&str>).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    load_layered(path, environment())
}

/// Same as [`load_config`], but reads the `SKYFLEET__` overrides from `overrides`
/// instead of the process environment.
///
/// Hosts that forward variables to the plugin explicitly use this entry point.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_overrides<T>(
    path: Option<impl AsRef<Path>>,
    overrides: HashMap<String, String>,
) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    load_layered(path, environment().source(Some(overrides)))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("areas")
        .try_parsing(true)
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, environment: Environment) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(environment);

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
