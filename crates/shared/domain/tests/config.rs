use serde_json::json;
use skyfleet_domain::AreaSet;
use skyfleet_domain::config::{LoggingConfig, PluginConfig};

#[test]
fn config_defaults_are_sane() {
    let config = PluginConfig::default();
    assert_eq!(config.areas, AreaSet::ALL);

    let logging = LoggingConfig::default();
    assert_eq!(logging.name, "skyfleet");
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(!logging.json);
    assert!(logging.directory.is_none());
    assert_eq!(logging.rotation, "daily");
    assert_eq!(logging.max_files, 10);
}

#[test]
fn plugin_config_deserializes() {
    let raw = json!({
        "areas": ["compute_group", "vm_sizes"],
        "logging": { "level": "debug", "json": true, "directory": "/tmp/skyfleet", "rotation": "hourly" }
    });

    let config: PluginConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(config.areas, AreaSet::COMPUTE_GROUP | AreaSet::VM_SIZES);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    assert_eq!(config.logging.rotation, "hourly");
    assert!(config.logging.console, "unset fields keep their defaults");
    assert_eq!(config.logging.directory, Some(std::path::PathBuf::from("/tmp/skyfleet")));
}

#[test]
fn areas_accept_a_single_name() {
    let config: PluginConfig =
        serde_json::from_value(json!({ "areas": "all" })).expect("config deserialize");
    assert_eq!(config.areas, AreaSet::ALL);
}

#[test]
fn unknown_area_is_rejected() {
    let result = serde_json::from_value::<PluginConfig>(json!({ "areas": ["compute_group", "gpu"] }));
    let err = result.expect_err("unknown area must fail");
    assert!(err.to_string().contains("unknown feature area 'gpu'"), "unexpected error: {err}");
}

#[test]
fn areas_serialize_as_names() {
    let value = serde_json::to_value(AreaSet::SCHEDULING | AreaSet::VM_SIZES).expect("serialize");
    assert_eq!(value, json!(["scheduling", "vm_sizes"]));
}

#[test]
fn deref_mut_updates_shared_config() {
    let mut config = PluginConfig::default();
    let snapshot = config.clone();
    config.areas = AreaSet::SCHEDULING;

    assert_eq!(config.areas, AreaSet::SCHEDULING);
    assert_eq!(snapshot.areas, AreaSet::ALL, "clones are copy-on-write");
}
