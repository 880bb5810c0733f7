//! Facade crate for the Skyfleet provisioning plugin.
//! Re-exports the field registries, the attribute mapping and the ambient helpers.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use skyfleet::{Attributes, ComputeGroupField};
//! use skyfleet::domain::config::PluginConfig;
//!
//! let reports = skyfleet::init(&PluginConfig::default()).unwrap();
//! assert_eq!(reports.len(), 3);
//!
//! let mut desired = Attributes::new();
//! desired.set(ComputeGroupField::DESIRED_CAPACITY, 3);
//! ```

pub use skyfleet_domain as domain;
pub use skyfleet_kernel as kernel;
pub use skyfleet_logger as logger;

pub use skyfleet_domain::{
    AreaSet, ComputeGroupField, FieldName, Registry, SchedulingField, VmSizesField,
};
pub use skyfleet_kernel::{Attributes, KernelError};

use skyfleet_domain::config::{LoggingConfig, PluginConfig};
use skyfleet_kernel::KernelErrorExt;
use skyfleet_kernel::audit::{AuditReport, audit_areas};
use skyfleet_logger::{Logger, LoggerBuilder, LoggerError};
use std::path::Path;
use tracing::{info, warn};

/// Loads [`PluginConfig`] from `path` (or `skyfleet.*`) plus `SKYFLEET__` overrides.
///
/// # Errors
/// Returns [`KernelError::Config`] if the layered configuration cannot be read.
pub fn load_config(path: Option<impl AsRef<Path>>) -> Result<PluginConfig, KernelError> {
    skyfleet_kernel::config::load_config(path)
}

/// Maps [`LoggingConfig`] onto a logger builder without installing it.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for an unknown level or rotation name.
pub fn logger_builder(config: &LoggingConfig) -> Result<LoggerBuilder, LoggerError> {
    let mut builder = Logger::builder()
        .name(&config.name)
        .console(config.console)
        .json(config.json)
        .max_files(config.max_files)
        .level_name(&config.level)?
        .rotation_name(&config.rotation)?;

    if let Some(filter) = &config.filter {
        builder = builder.env_filter(filter.clone());
    }
    if let Some(directory) = &config.directory {
        builder = builder.directory(directory.clone());
    }

    Ok(builder)
}

/// Installs the global subscriber described by `config`.
///
/// # Errors
/// See [`LoggerBuilder::init`].
pub fn start_logging(config: &LoggingConfig) -> Result<Logger, LoggerError> {
    logger_builder(config)?.init()
}

/// Audits the registry of every enabled feature area.
///
/// Returns one clean report per area, in declaration order.
///
/// # Errors
/// Returns [`KernelError::Audit`] for the first registry with findings.
pub fn init(config: &PluginConfig) -> Result<Vec<AuditReport>, KernelError> {
    if config.areas.is_empty() {
        warn!("No feature areas enabled");
    }

    let reports = audit_areas(config.areas)
        .into_iter()
        .map(AuditReport::into_result)
        .collect::<Result<Vec<_>, _>>()
        .context("Plugin initialization")?;

    for report in &reports {
        info!(registry = report.registry, fields = report.fields, "Field registry ready");
    }

    Ok(reports)
}
