//! Alias folding and capture of unknown fields.

use addr_model::{Component, NormalizedComponents, RawComponents};
use addr_standards::ComponentSchema;

/// Countries where `district` stays a district instead of also filling
/// `state_district`.
pub const SMALL_DISTRICT_COUNTRIES: &[&str] =
    &["BR", "CR", "ES", "NI", "PY", "RO", "TG", "TM", "XK"];

pub fn is_small_district_country(country_code: &str) -> bool {
    SMALL_DISTRICT_COUNTRIES.contains(&country_code)
}

/// Build canonical components from the raw fields.
///
/// Canonical keys are taken as given. Each alias fills its canonical component
/// only when that is still empty, and stays addressable under its own name.
/// Unknown keys are appended, space separated, to `attention`.
pub(crate) fn fold_aliases(
    fields: &RawComponents,
    schema: &ComponentSchema,
    country_code: &str,
) -> NormalizedComponents {
    let mut components = NormalizedComponents::new();
    for (key, value) in fields.iter() {
        if let Some(component) = Component::parse(key) {
            components.insert(component, value);
        }
    }

    if !is_small_district_country(country_code)
        && let Some(district) = components.get(Component::District).map(str::to_string)
    {
        components.insert(Component::StateDistrict, district);
    }

    let mut unknown = Vec::new();
    for (key, value) in fields.iter() {
        if Component::parse(key).is_some() {
            continue;
        }
        match schema.canonical_for_alias(key) {
            Some(component) => {
                components.insert_if_absent(component, value);
                components.insert_alias(key, value);
            }
            None if value.trim().is_empty() => {}
            None => unknown.push(value),
        }
    }

    if !unknown.is_empty() {
        let captured = unknown.join(" ");
        tracing::trace!(fields = unknown.len(), "captured unknown fields as attention");
        let attention = match components.get(Component::Attention) {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {captured}"),
            _ => captured,
        };
        components.insert(Component::Attention, attention);
    }
    components
}
