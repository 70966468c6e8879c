//! Unit tests for port mappings

use rcb_domain::value_objects::{ModelId, PortMapping, PortMappings, ProvideOptions};

#[test]
fn test_port_mapping_lookup() {
    let mapping: PortMapping = [("frame", "camera_frame_out")].into_iter().collect();
    assert_eq!(mapping.get("frame"), Some("camera_frame_out"));
    assert_eq!(mapping.get("trigger"), None);
    assert!(mapping.contains("frame"));
    assert_eq!(mapping.len(), 1);
}

#[test]
fn test_port_mappings_retain() {
    let mut mappings = PortMappings::new();
    mappings.insert(ModelId::new(1), PortMapping::new());
    mappings.insert(ModelId::new(2), PortMapping::new());
    mappings.insert(ModelId::new(3), PortMapping::new());

    mappings.retain(|model| model != ModelId::new(2));

    assert_eq!(
        mappings.models().collect::<Vec<_>>(),
        vec![ModelId::new(1), ModelId::new(3)]
    );
}

#[test]
fn test_provide_options_serialization() {
    let options = ProvideOptions::new("zoom")
        .slave_of("image")
        .with_port_mapping("level", "zoom_level");
    let json = serde_json::to_string(&options).expect("serialization should succeed");
    let deserialized: ProvideOptions =
        serde_json::from_str(&json).expect("deserialization should succeed");

    assert_eq!(options, deserialized);
    assert_eq!(deserialized.slave_of.as_deref(), Some("image"));
}
