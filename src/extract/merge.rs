use crate::model::{ComponentRef, ImportRecord};
use crate::util::is_component_name;

/// Merge local exported components with components inferred from imports.
///
/// Local names are pushed unconditionally with `source: None`; an imported
/// candidate is pushed only if no entry already matches both name and source.
/// The scan is linear; per-file component counts are small.
pub(super) fn merge_components(
    local: Vec<String>,
    imports: &[ImportRecord],
) -> Vec<ComponentRef> {
    let mut combined: Vec<ComponentRef> = local
        .into_iter()
        .map(|name| ComponentRef { name, source: None })
        .collect();

    for candidate in imported_components(imports) {
        let exists = combined
            .iter()
            .any(|c| c.name == candidate.name && c.source == candidate.source);
        if !exists {
            combined.push(candidate);
        }
    }

    combined
}

/// Infer component candidates from import bindings: any capitalized default
/// import, named import (alias wins over original), or namespace alias.
fn imported_components(imports: &[ImportRecord]) -> Vec<ComponentRef> {
    let mut candidates = Vec::new();

    for record in imports {
        if let Some(default) = &record.default_import {
            if is_component_name(default) {
                candidates.push(ComponentRef {
                    name: default.clone(),
                    source: Some(record.source.clone()),
                });
            }
        }

        for specifier in &record.named_imports {
            let (original, alias) = split_alias(specifier);
            let bound = alias.unwrap_or(original);
            if is_component_name(bound) {
                candidates.push(ComponentRef {
                    name: bound.to_string(),
                    source: Some(record.source.clone()),
                });
            }
        }

        if let Some(namespace) = &record.namespace_import {
            if let Some(alias) = namespace_alias(namespace) {
                if is_component_name(alias) {
                    candidates.push(ComponentRef {
                        name: alias.to_string(),
                        source: Some(record.source.clone()),
                    });
                }
            }
        }
    }

    candidates
}

/// Split a `"name as alias"` specifier back into its parts.
fn split_alias(specifier: &str) -> (&str, Option<&str>) {
    let mut parts = specifier.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(original), Some("as"), Some(alias)) => (original, Some(alias)),
        _ => (specifier, None),
    }
}

/// Recover the bound alias from the `"* as alias"` namespace encoding.
/// Text that does not match the encoding yields no candidate.
fn namespace_alias(namespace: &str) -> Option<&str> {
    let mut parts = namespace.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("*"), Some("as"), Some(alias)) => Some(alias),
        _ => None,
    }
}
