//! Checks a field registry against the conventions its consumers rely on:
//! non-empty, pairwise distinct, snake_case keys that the area's schema declares.

use crate::error::KernelError;
use skyfleet_domain::field::is_snake_case;
use skyfleet_domain::fields::{compute_group, scheduling, vm_sizes};
use skyfleet_domain::{
    AreaSet, ComputeGroupField, FieldName, Registry, ResourceSchema, SchedulingField, VmSizesField,
};
use std::collections::HashSet;
use std::fmt::{self, Display};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    Empty { position: usize },
    Duplicate { key: &'static str },
    NamingConvention { key: &'static str },
    /// The area's schema does not declare the key.
    Unrecognized { key: &'static str },
    /// The schema belongs to another feature area than the registry.
    AreaMismatch { schema: &'static str },
}

impl Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { position } => write!(f, "empty key at position {position}"),
            Self::Duplicate { key } => write!(f, "duplicate key '{key}'"),
            Self::NamingConvention { key } => write!(f, "key '{key}' is not snake_case"),
            Self::Unrecognized { key } => write!(f, "key '{key}' is not declared by the schema"),
            Self::AreaMismatch { schema } => {
                write!(f, "schema '{schema}' belongs to another feature area")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub registry: &'static str,
    pub area: AreaSet,
    pub fields: usize,
    pub findings: Vec<Finding>,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// # Errors
    /// Returns [`KernelError::Audit`] listing every finding when the report is not clean.
    pub fn into_result(self) -> Result<Self, KernelError> {
        if self.is_clean() {
            return Ok(self);
        }

        let findings = self.findings.iter().map(ToString::to_string).collect::<Vec<_>>();
        Err(KernelError::Audit {
            message: format!("{}: {}", self.registry, findings.join(", ")).into(),
            context: None,
        })
    }
}

/// Audits registry `R` against `schema`.
#[must_use]
pub fn audit<R: Registry>(schema: &ResourceSchema) -> AuditReport {
    audit_fields(R::REGISTRY, R::AREA, R::FIELDS, schema)
}

/// Audits an arbitrary list of fields, e.g. one assembled by a plugin extension.
#[must_use]
pub fn audit_fields(
    registry: &'static str,
    area: AreaSet,
    fields: &[FieldName],
    schema: &ResourceSchema,
) -> AuditReport {
    let mut findings = Vec::new();
    let mut seen = HashSet::with_capacity(fields.len());

    if schema.area != area {
        findings.push(Finding::AreaMismatch { schema: schema.name });
    }

    for (position, field) in fields.iter().enumerate() {
        let key = field.as_str();
        if key.is_empty() {
            findings.push(Finding::Empty { position });
            continue;
        }
        if !seen.insert(key) {
            findings.push(Finding::Duplicate { key });
        }
        if !is_snake_case(key) {
            findings.push(Finding::NamingConvention { key });
        }
        if !schema.recognizes(key) {
            findings.push(Finding::Unrecognized { key });
        }
    }

    let report = AuditReport { registry, area, fields: fields.len(), findings };
    if report.is_clean() {
        debug!(registry, fields = report.fields, "Registry audit passed");
    } else {
        warn!(registry, findings = report.findings.len(), "Registry audit reported findings");
    }
    report
}

/// Audits the registry of every area in `areas`.
#[must_use]
pub fn audit_areas(areas: AreaSet) -> Vec<AuditReport> {
    let mut reports = Vec::new();

    if areas.contains(AreaSet::COMPUTE_GROUP) {
        reports.push(audit::<ComputeGroupField>(&compute_group::schema()));
    }
    if areas.contains(AreaSet::SCHEDULING) {
        reports.push(audit::<SchedulingField>(&scheduling::schema()));
    }
    if areas.contains(AreaSet::VM_SIZES) {
        reports.push(audit::<VmSizesField>(&vm_sizes::schema()));
    }

    reports
}
