use crate::areas::AreaSet;
use crate::constants::VM_SIZES;
use crate::field_registry;
use crate::schema::{Attribute, ResourceSchema, ValueKind};

field_registry! {
    /// Keys of the VM-size filter.
    pub struct VmSizesField in AreaSet::VM_SIZES {
        FILTERS => "filters",
        MIN_VCPU => "min_vcpu",
        MAX_VCPU => "max_vcpu",
        MIN_MEMORY_GIB => "min_memory_gib",
        MAX_MEMORY_GIB => "max_memory_gib",
        SERIES => "series",
        ARCHITECTURES => "architectures",
    }
}

/// `filters { min_vcpu, max_vcpu, min_memory_gib, max_memory_gib, series, architectures }`
#[must_use]
pub fn schema() -> ResourceSchema {
    ResourceSchema::new(VM_SIZES, AreaSet::VM_SIZES).attribute(
        Attribute::block(
            VmSizesField::FILTERS,
            [
                Attribute::new(VmSizesField::MIN_VCPU, ValueKind::Integer),
                Attribute::new(VmSizesField::MAX_VCPU, ValueKind::Integer),
                Attribute::new(VmSizesField::MIN_MEMORY_GIB, ValueKind::Float),
                Attribute::new(VmSizesField::MAX_MEMORY_GIB, ValueKind::Float),
                Attribute::new(VmSizesField::SERIES, ValueKind::StringList)
                    .describe("VM series to include, e.g. `D v3`."),
                Attribute::new(VmSizesField::ARCHITECTURES, ValueKind::StringList)
                    .describe("CPU architectures to include, e.g. `x86_64`, `arm64`."),
            ],
        )
        .describe("Restricts the VM sizes the node group may launch."),
    )
}
