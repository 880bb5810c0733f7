use crate::areas::AreaSet;
use crate::constants::SCHEDULING;
use crate::field_registry;
use crate::schema::{Attribute, ResourceSchema, ValueKind};

field_registry! {
    /// Keys of the node-group shutdown schedule.
    pub struct SchedulingField in AreaSet::SCHEDULING {
        SCHEDULING => "scheduling",
        SHUTDOWN_HOURS => "shutdown_hours",
        TIME_WINDOWS => "time_windows",
        /// Nested under `shutdown_hours`, hence the generic key.
        SHUTDOWN_HOURS_IS_ENABLED => "is_enabled",
    }
}

/// `scheduling { shutdown_hours { is_enabled, time_windows } }`
#[must_use]
pub fn schema() -> ResourceSchema {
    let shutdown_hours = Attribute::block(
        SchedulingField::SHUTDOWN_HOURS,
        [
            Attribute::new(SchedulingField::SHUTDOWN_HOURS_IS_ENABLED, ValueKind::Boolean)
                .describe("Whether the node group is stopped outside its time windows."),
            Attribute::new(SchedulingField::TIME_WINDOWS, ValueKind::StringList)
                .required()
                .describe("Windows in `Fri:15:30-Sat:13:30` form during which nodes are off."),
        ],
    );

    ResourceSchema::new(SCHEDULING, AreaSet::SCHEDULING).attribute(
        Attribute::block(SchedulingField::SCHEDULING, [shutdown_hours])
            .describe("Scheduling policy of the node group."),
    )
}
