//! Unit tests for DI layers and context stacks

use rcb_domain::Error;
use rcb_domain::entities::{
    DependencyInjection, DependencyInjectionContext, InstanceRequirements, Placeholder, Selection,
};
use rcb_domain::value_objects::ModelId;

fn layer(rules: &[(&str, &str)]) -> DependencyInjection {
    rules
        .iter()
        .map(|(role, instance)| (Placeholder::role(*role), Selection::instance(*instance)))
        .collect()
}

#[test]
fn test_empty_stack_resolves_nothing() {
    let context = DependencyInjectionContext::new();
    assert!(context.is_empty());
    assert_eq!(context.resolve(&Placeholder::role("camera")), None);
}

#[test]
fn test_last_pushed_layer_wins() {
    let mut context = DependencyInjectionContext::new();
    context.push(layer(&[("camera", "left")]));
    context.push(layer(&[("camera", "right")]));

    assert_eq!(
        context.resolve(&Placeholder::role("camera")),
        Some(&Selection::instance("right"))
    );
}

#[test]
fn test_earlier_layers_are_fallbacks() {
    let mut context = DependencyInjectionContext::new();
    context.push(layer(&[("camera", "left"), ("laser", "hokuyo")]));
    context.push(layer(&[("camera", "right")]));

    assert_eq!(
        context.resolve(&Placeholder::role("laser")),
        Some(&Selection::instance("hokuyo"))
    );
    assert_eq!(context.len(), 2);
}

#[test]
fn test_pushed_layer_is_a_snapshot() {
    let mut rules = layer(&[("camera", "left")]);
    let mut context = DependencyInjectionContext::new();
    context.push(rules.clone());
    rules.add(Placeholder::role("camera"), Selection::instance("right"));

    assert_eq!(
        context.resolve(&Placeholder::role("camera")),
        Some(&Selection::instance("left"))
    );
}

#[test]
fn test_model_placeholders() {
    let abstract_camera = ModelId::new(3);
    let driver = ModelId::new(7);
    let mut rules = DependencyInjection::new();
    rules.add(abstract_camera, driver);

    let mut context = DependencyInjectionContext::new();
    context.push(rules);

    assert_eq!(
        context.resolve(&Placeholder::Model(abstract_camera)),
        Some(&Selection::Model(driver))
    );
}

#[test]
fn test_resolve_required_fails_on_unknown_placeholder() {
    let context = DependencyInjectionContext::new();
    match context.resolve_required(&Placeholder::role("camera")) {
        Err(Error::UnsatisfiableArgument { placeholder }) => {
            assert!(placeholder.contains("camera"));
        }
        other => panic!("Expected UnsatisfiableArgument error, got {other:?}"),
    }
}

#[test]
fn test_resolve_transitive_follows_aliases_across_layers() {
    let mut base = DependencyInjection::new();
    base.add(Placeholder::role("front"), Selection::instance("left"));
    let mut top = DependencyInjection::new();
    top.add(Placeholder::role("camera"), Selection::role("front"));

    let mut context = DependencyInjectionContext::new();
    context.push(base);
    context.push(top);

    let selection = context
        .resolve_transitive(&Placeholder::role("camera"), 8)
        .expect("alias should resolve");
    assert_eq!(selection, &Selection::instance("left"));
}

#[test]
fn test_resolve_transitive_detects_cycles() {
    let mut rules = DependencyInjection::new();
    rules.add(Placeholder::role("a"), Selection::role("b"));
    rules.add(Placeholder::role("b"), Selection::role("a"));
    let mut context = DependencyInjectionContext::new();
    context.push(rules);

    let result = context.resolve_transitive(&Placeholder::role("a"), 32);
    assert!(matches!(result, Err(Error::UnsatisfiableArgument { .. })));
}

#[test]
fn test_resolve_transitive_respects_max_depth() {
    let mut rules = DependencyInjection::new();
    rules.add(Placeholder::role("a"), Selection::role("b"));
    rules.add(Placeholder::role("b"), Selection::role("c"));
    rules.add(Placeholder::role("c"), Selection::instance("camera"));
    let mut context = DependencyInjectionContext::new();
    context.push(rules);

    assert!(context.resolve_transitive(&Placeholder::role("a"), 2).is_err());
    assert!(context.resolve_transitive(&Placeholder::role("a"), 3).is_ok());
}

#[test]
fn test_merge_prefers_other_layer() {
    let mut base = layer(&[("camera", "left"), ("laser", "hokuyo")]);
    base.merge(&layer(&[("camera", "right")]));

    assert_eq!(base.len(), 2);
    assert_eq!(
        base.get(&Placeholder::role("camera")),
        Some(&Selection::instance("right"))
    );
}

#[test]
fn test_requirements_selection() {
    let requirements = InstanceRequirements::new([ModelId::new(1)]);
    let mut rules = DependencyInjection::new();
    rules.add(Placeholder::role("child"), requirements.clone());

    assert_eq!(
        rules.get(&Placeholder::role("child")),
        Some(&Selection::requirements(requirements))
    );
}
