use crate::areas::AreaSet;
use crate::constants::COMPUTE_GROUP;
use crate::field_registry;
use crate::schema::{Attribute, ResourceSchema, ValueKind};

field_registry! {
    /// Core identity and capacity keys of a compute group.
    pub struct ComputeGroupField in AreaSet::COMPUTE_GROUP {
        NAME => "name",
        REGION => "region",
        PRODUCT => "product",
        RESOURCE_GROUP_NAME => "resource_group_name",
        MAX_SIZE => "max_size",
        MIN_SIZE => "min_size",
        DESIRED_CAPACITY => "desired_capacity",
    }
}

/// Flat attribute map of a compute group.
#[must_use]
pub fn schema() -> ResourceSchema {
    ResourceSchema::new(COMPUTE_GROUP, AreaSet::COMPUTE_GROUP)
        .attribute(
            Attribute::new(ComputeGroupField::NAME, ValueKind::String)
                .required()
                .describe("Display name of the compute group."),
        )
        .attribute(
            Attribute::new(ComputeGroupField::REGION, ValueKind::String)
                .required()
                .describe("Cloud region the group is provisioned in."),
        )
        .attribute(
            Attribute::new(ComputeGroupField::PRODUCT, ValueKind::String)
                .required()
                .describe("Operating system product of the instances, e.g. `Linux`."),
        )
        .attribute(
            Attribute::new(ComputeGroupField::RESOURCE_GROUP_NAME, ValueKind::String)
                .required()
                .describe("Resource group that owns the instances."),
        )
        .attribute(
            Attribute::new(ComputeGroupField::MAX_SIZE, ValueKind::Integer)
                .describe("Upper bound of the instance count."),
        )
        .attribute(
            Attribute::new(ComputeGroupField::MIN_SIZE, ValueKind::Integer)
                .describe("Lower bound of the instance count."),
        )
        .attribute(
            Attribute::new(ComputeGroupField::DESIRED_CAPACITY, ValueKind::Integer)
                .describe("Number of instances the group should run."),
        )
}
