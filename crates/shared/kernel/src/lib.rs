//! Kernel utilities shared by every feature area.
//! Keep this crate lightweight; it layers runtime helpers over the pure domain registries.
//!
//! ## Attribute mapping
//! Every read and write goes through a declared [`FieldName`](skyfleet_domain::FieldName):
//! ```rust
//! # use skyfleet_kernel::Attributes;
//! # use skyfleet_kernel::domain::ComputeGroupField;
//! let mut attributes = Attributes::new();
//! attributes.set(ComputeGroupField::MAX_SIZE, 10);
//! assert_eq!(attributes.get_as::<u32>(ComputeGroupField::MAX_SIZE).unwrap(), Some(10));
//! ```
//!
//! ## Registry audit
//! ```rust
//! # use skyfleet_kernel::audit::audit_areas;
//! # use skyfleet_kernel::domain::AreaSet;
//! assert!(audit_areas(AreaSet::ALL).iter().all(|report| report.is_clean()));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use skyfleet_kernel::config::load_config;
//! use skyfleet_kernel::domain::config::PluginConfig;
//! let cfg: PluginConfig = load_config(Some("config/skyfleet.toml")).unwrap();
//! ```
pub mod attributes;
pub mod audit;
pub mod config;
mod error;

pub use attributes::Attributes;
pub use error::{KernelError, KernelErrorExt};
pub use skyfleet_domain as domain;
