//! Unit tests for service selection

use rcb_application::{ServiceSelector, ServiceSelectorInterface};
use rcb_domain::Error;
use rcb_domain::ports::ModelRegistry;
use rcb_domain::value_objects::{DynamicSlaveOptions, ModelId, ProvideOptions};
use rcb_providers::InMemoryModelRegistry;

struct Camera {
    registry: InMemoryModelRegistry,
    image_source: ModelId,
    zoom: ModelId,
    pan: ModelId,
    cam: ModelId,
}

fn camera() -> Camera {
    let mut registry = InMemoryModelRegistry::new();
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
    let pan = registry.data_service_model("base::Pan").expect("service model");
    registry
        .add_input_port(pan, "pan_cmd", "/double")
        .expect("port");

    let cam = registry.component_model("Cam").expect("component model");
    registry
        .add_output_port(cam, "camera_frame_out", "/base/Image")
        .expect("port");
    registry
        .provides(
            cam,
            image_source,
            ProvideOptions::new("image").with_port_mapping("frame", "camera_frame_out"),
        )
        .expect("Cam provides ImageSource");

    Camera {
        registry,
        image_source,
        zoom,
        pan,
        cam,
    }
}

fn declare_zoom_slaves(camera: &mut Camera) {
    let zoom = camera.zoom;
    camera
        .registry
        .data_service_mut(camera.cam, "image")
        .expect("image is declared")
        .dynamic_slaves(zoom, DynamicSlaveOptions::new(), None);
}

#[test]
fn test_select_unique_service() {
    let mut camera = camera();
    let selected = ServiceSelector::new()
        .select(
            &mut camera.registry,
            camera.cam,
            camera.image_source,
            None,
            "vision",
        )
        .expect("image is selected");

    assert!(!selected.dynamic);
    assert_eq!(selected.component, camera.cam);
    assert_eq!(selected.service.full_name(), "image");
    assert_eq!(selected.service.model(), camera.image_source);
}

#[test]
fn test_select_ambiguous_service() {
    let mut camera = camera();
    camera
        .registry
        .provides(
            camera.cam,
            camera.image_source,
            ProvideOptions::new("preview").with_port_mapping("frame", "camera_frame_out"),
        )
        .expect("second image source");

    match ServiceSelector::new().select(
        &mut camera.registry,
        camera.cam,
        camera.image_source,
        None,
        "vision",
    ) {
        Err(Error::AmbiguousService {
            component,
            candidates,
            ..
        }) => {
            assert_eq!(component, "Cam");
            assert_eq!(candidates, vec!["image".to_string(), "preview".to_string()]);
        }
        other => panic!("Expected AmbiguousService error, got {other:?}"),
    }
}

#[test]
fn test_name_hint_disambiguates() {
    let mut camera = camera();
    camera
        .registry
        .provides(
            camera.cam,
            camera.image_source,
            ProvideOptions::new("preview").with_port_mapping("frame", "camera_frame_out"),
        )
        .expect("second image source");

    let selected = ServiceSelector::new()
        .select(
            &mut camera.registry,
            camera.cam,
            camera.image_source,
            Some("preview"),
            "vision",
        )
        .expect("hint selects preview");

    assert_eq!(selected.service.full_name(), "preview");
}

#[test]
fn test_select_missing_service() {
    let mut camera = camera();
    declare_zoom_slaves(&mut camera);
    let before = camera.registry.len();

    match ServiceSelector::new().select(&mut camera.registry, camera.cam, camera.pan, None, "pan") {
        Err(Error::NotFound { resource }) => assert!(resource.contains("base::Pan")),
        other => panic!("Expected NotFound error, got {other:?}"),
    }
    assert_eq!(camera.registry.len(), before);
}

#[test]
fn test_select_falls_back_to_dynamic_slave() {
    let mut camera = camera();
    declare_zoom_slaves(&mut camera);

    let selected = ServiceSelector::new()
        .select(
            &mut camera.registry,
            camera.cam,
            camera.zoom,
            Some("zoom"),
            "needs-zoom",
        )
        .expect("zoom slave is created");

    assert!(selected.dynamic);
    assert_ne!(selected.component, camera.cam);
    assert!(camera.registry.fullfills(selected.component, &[camera.cam]));
    assert_eq!(selected.service.full_name(), "image.zoom");
    assert_eq!(selected.service.master(), Some("image"));
    assert_eq!(
        selected
            .service
            .port_mappings_for(camera.zoom)
            .expect("zoom mapping")
            .get("zoom_level"),
        Some("zoom_level")
    );
    assert!(
        camera
            .registry
            .find_input_port(selected.component, "zoom_level")
            .is_some()
    );
    assert!(camera.registry.find_input_port(camera.cam, "zoom_level").is_none());
}

#[test]
fn test_dynamic_slave_defaults_to_model_short_name() {
    let mut camera = camera();
    declare_zoom_slaves(&mut camera);

    let selected = ServiceSelector::new()
        .select(&mut camera.registry, camera.cam, camera.zoom, None, "needs-zoom")
        .expect("zoom slave is created");

    assert_eq!(selected.service.full_name(), "image.Zoom");
}

#[test]
fn test_two_reasons_give_independent_specializations() {
    let mut camera = camera();
    declare_zoom_slaves(&mut camera);
    let selector = ServiceSelector::new();

    let first = selector
        .select(&mut camera.registry, camera.cam, camera.zoom, Some("zoom"), "left")
        .expect("first specialization");
    let second = selector
        .select(&mut camera.registry, camera.cam, camera.zoom, Some("zoom"), "right")
        .expect("second specialization");

    assert_ne!(first.component, second.component);
    assert_eq!(camera.registry.name(first.component).expect("model"), "Cam<left>");
    assert_eq!(camera.registry.name(second.component).expect("model"), "Cam<right>");
    assert_eq!(camera.registry.each_data_service(camera.cam).len(), 1);
    assert_eq!(
        camera
            .registry
            .each_data_service(first.component)
            .iter()
            .filter(|srv| srv.full_name() == "image.zoom")
            .count(),
        1
    );
}
