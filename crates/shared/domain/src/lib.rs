//! # Domain Models
//!
//! Field-name registries for the provisioning plugin, plus the schema declarations
//! the registries are checked against.
//! Keep it lean: no I/O, networking, or heavy logic—just names, declarations, and simple helpers.

pub mod areas;
pub mod config;
pub mod constants;
pub mod field;
pub mod fields;
pub mod schema;

pub use areas::AreaSet;
pub use field::{FieldName, Registry};
pub use fields::{ComputeGroupField, SchedulingField, VmSizesField};
pub use schema::{Attribute, ResourceSchema, ValueKind};
