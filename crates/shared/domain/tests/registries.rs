use skyfleet_domain::fields::{compute_group, scheduling, vm_sizes};
use skyfleet_domain::{
    AreaSet, ComputeGroupField, FieldName, Registry, ResourceSchema, SchedulingField, ValueKind,
    VmSizesField,
};
use std::collections::HashSet;

fn keys<R: Registry>() -> Vec<&'static str> {
    R::FIELDS.iter().map(|field| field.as_str()).collect()
}

fn assert_recognized<R: Registry>(schema: &ResourceSchema) {
    assert_eq!(schema.area, R::AREA, "{} is declared for another area", R::REGISTRY);
    for field in R::FIELDS {
        assert!(schema.recognizes(field.as_str()), "{} key '{field}' is not declared", R::REGISTRY);
    }
}

#[test]
fn compute_group_keys() {
    assert_eq!(
        keys::<ComputeGroupField>(),
        vec![
            "name",
            "region",
            "product",
            "resource_group_name",
            "max_size",
            "min_size",
            "desired_capacity"
        ]
    );
    assert_eq!(ComputeGroupField::RESOURCE_GROUP_NAME.as_str(), "resource_group_name");
    assert_eq!(ComputeGroupField::AREA, AreaSet::COMPUTE_GROUP);
}

#[test]
fn scheduling_keys() {
    assert_eq!(
        keys::<SchedulingField>(),
        vec!["scheduling", "shutdown_hours", "time_windows", "is_enabled"]
    );
    assert_eq!(SchedulingField::SHUTDOWN_HOURS_IS_ENABLED.as_str(), "is_enabled");
    assert_eq!(SchedulingField::AREA, AreaSet::SCHEDULING);
}

#[test]
fn vm_sizes_keys() {
    assert_eq!(
        keys::<VmSizesField>(),
        vec![
            "filters",
            "min_vcpu",
            "max_vcpu",
            "min_memory_gib",
            "max_memory_gib",
            "series",
            "architectures"
        ]
    );
    assert_eq!(VmSizesField::MIN_MEMORY_GIB.as_str(), "min_memory_gib");
    assert_eq!(VmSizesField::AREA, AreaSet::VM_SIZES);
}

#[test]
fn no_key_appears_twice_within_a_registry() {
    for fields in [ComputeGroupField::FIELDS, SchedulingField::FIELDS, VmSizesField::FIELDS] {
        let unique: HashSet<FieldName> = fields.iter().copied().collect();
        assert_eq!(unique.len(), fields.len());
    }
}

#[test]
fn registries_are_independent() {
    // "scheduling" is both an area name and a scheduling key; the registries don't share keys.
    let compute: HashSet<&str> = keys::<ComputeGroupField>().into_iter().collect();
    assert!(keys::<SchedulingField>().iter().all(|key| !compute.contains(key)));
}

#[test]
fn every_key_is_recognized_by_its_schema() {
    assert_recognized::<ComputeGroupField>(&compute_group::schema());
    assert_recognized::<SchedulingField>(&scheduling::schema());
    assert_recognized::<VmSizesField>(&vm_sizes::schema());
}

#[test]
fn schemas_declare_nothing_beyond_the_registry() {
    let declared: Vec<FieldName> = vm_sizes::schema().keys();
    assert_eq!(declared, VmSizesField::FIELDS);

    let mut scheduling_keys = scheduling::schema().keys();
    scheduling_keys.sort();
    let mut registry = SchedulingField::FIELDS.to_vec();
    registry.sort();
    assert_eq!(scheduling_keys, registry);
}

#[test]
fn scheduling_nests_shutdown_hours() {
    let schema = scheduling::schema();
    let root = &schema.attributes()[0];
    assert_eq!(root.name, SchedulingField::SCHEDULING);
    assert_eq!(root.kind, ValueKind::Block);

    let shutdown_hours = &root.children[0];
    assert_eq!(shutdown_hours.name, SchedulingField::SHUTDOWN_HOURS);
    let nested: Vec<FieldName> = shutdown_hours.children.iter().map(|child| child.name).collect();
    assert_eq!(
        nested,
        vec![SchedulingField::SHUTDOWN_HOURS_IS_ENABLED, SchedulingField::TIME_WINDOWS]
    );
}

#[test]
fn compute_group_identity_is_required() {
    let schema = compute_group::schema();
    for field in [
        ComputeGroupField::NAME,
        ComputeGroupField::REGION,
        ComputeGroupField::PRODUCT,
        ComputeGroupField::RESOURCE_GROUP_NAME,
    ] {
        let attribute = schema.find(field.as_str()).expect("declared");
        assert!(attribute.required, "'{field}' should be required");
        assert_eq!(attribute.kind, ValueKind::String);
    }
    let capacity = schema.find("desired_capacity").expect("declared");
    assert_eq!(capacity.kind, ValueKind::Integer);
    assert!(!capacity.required);
}

#[test]
fn field_names_serialize_as_plain_keys() {
    let value = serde_json::to_value(ComputeGroupField::MAX_SIZE).expect("serialize");
    assert_eq!(value, serde_json::json!("max_size"));
}

#[test]
fn registry_name_is_separate_from_the_name_field() {
    assert_eq!(ComputeGroupField::NAME, "name");
    assert_eq!(<ComputeGroupField as Registry>::REGISTRY, "ComputeGroupField");
    assert_eq!(ComputeGroupField::REGISTRY, "ComputeGroupField");
}
