//! One module per feature area: the registry of keys and the schema it is declared against.

pub mod compute_group;
pub mod scheduling;
pub mod vm_sizes;

pub use compute_group::ComputeGroupField;
pub use scheduling::SchedulingField;
pub use vm_sizes::VmSizesField;
