//! Bootstrap Tests

use rcb_domain::entities::{Placeholder, Selection};
use rcb_domain::ports::ModelRegistry;
use rcb_domain::value_objects::{DynamicSlaveOptions, ProvideOptions};
use rcb_domain::Error;
use rcb_infrastructure::config::{ConfigBuilder, ResolutionConfig};
use rcb_infrastructure::init_environment;

#[test]
fn test_environment_follows_configuration() {
    let config = ConfigBuilder::new()
        .with_resolution(ResolutionConfig {
            strict_port_types: false,
            allow_dynamic_ports: false,
            max_selection_depth: 3,
        })
        .build();

    let env = init_environment(config).expect("environment");

    assert!(!env.registry().options().strict_port_types);
    assert!(!env.registry().options().allow_dynamic_ports);
    assert_eq!(env.profiles().max_selection_depth(), 3);
    assert_eq!(env.config().resolution.max_selection_depth, 3);
    assert!(env.registry().is_empty());
}

#[test]
fn test_environment_rejects_invalid_configuration() {
    let config = ConfigBuilder::new().with_max_selection_depth(0).build();
    assert!(matches!(
        init_environment(config),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_environment_resolves_and_selects() {
    let mut env = init_environment(ConfigBuilder::new().build()).expect("environment");

    let registry = env.registry_mut();
    let image_source = registry
        .data_service_model("base::ImageSource")
        .expect("service model");
    registry
        .add_output_port(image_source, "frame", "/base/Image")
        .expect("port");
    let zoom = registry.data_service_model("base::Zoom").expect("service model");
    registry
        .add_input_port(zoom, "zoom_level", "/double")
        .expect("port");
    let cam = registry.component_model("Cam").expect("component");
    registry
        .add_output_port(cam, "frame", "/base/Image")
        .expect("port");
    registry
        .provides(cam, image_source, ProvideOptions::new("image"))
        .expect("provides");
    registry
        .data_service_mut(cam, "image")
        .expect("image")
        .dynamic_slaves(zoom, DynamicSlaveOptions::new(), None);

    let profiles = env.profiles_mut();
    let robot = profiles.create_profile("robot").expect("profile");
    profiles
        .use_rules(robot, [(Placeholder::role("camera"), Selection::instance("front"))])
        .expect("rules");
    profiles.define(robot, "camera", cam).expect("define");

    let resolved = env.resolved_definition(robot, "camera").expect("resolved");
    assert_eq!(resolved.models(), &[cam]);
    assert_eq!(
        resolved
            .dependency_injection_context()
            .resolve(&Placeholder::role("camera")),
        Some(&Selection::instance("front"))
    );

    let selected = env
        .select_service(cam, zoom, Some("zoom"), "needs-zoom")
        .expect("dynamic slave");
    assert!(selected.dynamic);
    assert_eq!(selected.service.full_name(), "image.zoom");
    assert_eq!(
        env.registry().name(selected.component).expect("model"),
        "Cam<needs-zoom>"
    );
}
