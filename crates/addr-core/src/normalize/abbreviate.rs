//! Abbreviation of component values.

use addr_model::{Component, NormalizedComponents};
use addr_standards::{Abbreviation, ComponentSchema, ConfigStore};

/// Abbreviate values with every language of the country, in priority order.
/// A canonical component's aliases are abbreviated with it.
pub(crate) fn abbreviate(components: &mut NormalizedComponents, store: &ConfigStore, country_code: &str) {
    let Some(languages) = store.languages(country_code) else {
        return;
    };
    for language in languages {
        let Some(table) = store.abbreviations(language) else {
            continue;
        };
        for (name, rules) in table.components() {
            for target in targets(components, store.schema(), name) {
                if let Some(value) = value_mut(components, &target) {
                    apply_rules(value, rules);
                }
            }
        }
    }
}

fn targets(components: &NormalizedComponents, schema: &ComponentSchema, name: &str) -> Vec<String> {
    let mut targets = vec![name.to_string()];
    if let Some(component) = Component::parse(name) {
        targets.extend(
            components
                .aliases()
                .filter(|(alias, _)| schema.canonical_for_alias(alias) == Some(component))
                .map(|(alias, _)| alias.to_string()),
        );
    }
    targets
}

fn value_mut<'c>(components: &'c mut NormalizedComponents, name: &str) -> Option<&'c mut String> {
    match Component::parse(name) {
        Some(component) => components.get_mut(component),
        None => components.alias_mut(name),
    }
}

fn apply_rules(value: &mut String, rules: &[Abbreviation]) {
    for rule in rules {
        let abbreviated = rule.apply(value).into_owned();
        *value = abbreviated;
    }
}
