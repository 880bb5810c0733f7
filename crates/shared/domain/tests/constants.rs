use skyfleet_domain::AreaSet;
use skyfleet_domain::constants::{COMPUTE_GROUP, SCHEDULING, VM_SIZES};

#[test]
fn constants_match_area_strings() {
    assert_eq!(COMPUTE_GROUP, "compute_group");
    assert_eq!(SCHEDULING, "scheduling");
    assert_eq!(VM_SIZES, "vm_sizes");
}

#[test]
fn area_names_resolve_to_flags() {
    assert_eq!(AreaSet::from(COMPUTE_GROUP), AreaSet::COMPUTE_GROUP);
    assert_eq!(AreaSet::from(SCHEDULING), AreaSet::SCHEDULING);
    assert_eq!(AreaSet::from(VM_SIZES), AreaSet::VM_SIZES);
    assert_eq!(AreaSet::from("*"), AreaSet::ALL);
    assert_eq!(AreaSet::from("all"), AreaSet::ALL);
    assert!(AreaSet::from("unknown").is_empty());
}

#[test]
fn area_names_follow_declaration_order() {
    assert_eq!(AreaSet::ALL.names(), vec![COMPUTE_GROUP, SCHEDULING, VM_SIZES]);
    assert_eq!((AreaSet::VM_SIZES | AreaSet::COMPUTE_GROUP).names(), vec![COMPUTE_GROUP, VM_SIZES]);
    assert!(AreaSet::empty().names().is_empty());
}
