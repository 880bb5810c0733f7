//! Canonical names of the feature areas served by the plugin.

pub const COMPUTE_GROUP: &str = "compute_group";
pub const SCHEDULING: &str = "scheduling";
pub const VM_SIZES: &str = "vm_sizes";
