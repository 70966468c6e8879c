//! Port projection helpers
//!
//! A service declaration is checked against one service model, but the
//! binding must also answer for every model that service model fulfills.
//! These helpers translate port names along the supermodel chain (where
//! ports may have been renamed) and through included services (where names
//! are kept as-is).

use rcb_domain::ports::ModelRegistry;
use rcb_domain::value_objects::{ModelId, PortMapping, PortMappings};
use std::collections::BTreeMap;

/// Ports of `target`, keyed by their name in `target`, valued by their name
/// in `model`
///
/// Returns `None` when `model` does not fulfill `target`.
pub(crate) fn names_in(
    registry: &dyn ModelRegistry,
    model: ModelId,
    target: ModelId,
) -> Option<BTreeMap<String, String>> {
    names_in_guarded(registry, model, target, &mut Vec::new())
}

fn names_in_guarded(
    registry: &dyn ModelRegistry,
    model: ModelId,
    target: ModelId,
    visiting: &mut Vec<ModelId>,
) -> Option<BTreeMap<String, String>> {
    let current = registry.model(model).ok()?;
    if model == target {
        return Some(
            current
                .ports()
                .iter()
                .map(|p| (p.name.clone(), p.name.clone()))
                .collect(),
        );
    }
    if visiting.contains(&model) {
        return None;
    }
    visiting.push(model);

    let mut found = None;
    if let Some(parent) = current.supermodel() {
        if let Some(in_parent) = names_in_guarded(registry, parent, target, visiting) {
            found = Some(
                in_parent
                    .into_iter()
                    .filter_map(|(target_name, parent_name)| {
                        current
                            .port_name_from_parent(&parent_name)
                            .map(|own| (target_name, own.to_string()))
                    })
                    .collect(),
            );
        }
    }
    if found.is_none() {
        found = current
            .provided()
            .iter()
            .find_map(|&included| names_in_guarded(registry, included, target, visiting));
    }

    visiting.pop();
    found
}

/// One mapping table per data service model `service_model` fulfills
///
/// `direct` maps the ports of `service_model` itself onto component ports.
pub(crate) fn fullfilled_mappings(
    registry: &dyn ModelRegistry,
    service_model: ModelId,
    direct: &PortMapping,
) -> PortMappings {
    let mut mappings = PortMappings::new();
    for fullfilled in registry.fullfilled_models(service_model) {
        let is_service = registry
            .model(fullfilled)
            .map(|m| m.is_data_service())
            .unwrap_or(false);
        if !is_service {
            continue;
        }
        let Some(names) = names_in(registry, service_model, fullfilled) else {
            continue;
        };
        let table = names
            .iter()
            .filter_map(|(target_name, own_name)| {
                direct
                    .get(own_name)
                    .map(|task_port| (target_name.clone(), task_port.to_string()))
            })
            .collect();
        mappings.insert(fullfilled, table);
    }
    mappings
}
