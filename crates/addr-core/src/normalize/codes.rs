//! State and county code resolution.

use addr_model::{CaseInsensitiveSet, Component, NormalizedComponents};
use addr_standards::ConfigStore;

/// Replace `state` / `state_code` with the table's canonical pair when
/// either matches a code or any name variant.
pub(crate) fn resolve_state_code(
    components: &mut NormalizedComponents,
    store: &ConfigStore,
    country_code: &str,
) {
    let Some(table) = store.state_codes(country_code) else {
        return;
    };
    let candidates: Vec<&str> = [Component::State, Component::StateCode]
        .into_iter()
        .filter_map(|component| components.get(component))
        .collect();
    if candidates.is_empty() {
        return;
    }
    let candidates = CaseInsensitiveSet::new(candidates);
    if let Some(entry) = table.find_by_code_or_name(&candidates) {
        tracing::trace!(state_code = %entry.code, "resolved state code");
        components.insert(Component::StateCode, entry.code.as_str());
        components.insert(Component::State, entry.name.display.as_str());
    }
}

/// Fill `county_code` from the county name when it is missing.
pub(crate) fn resolve_county_code(
    components: &mut NormalizedComponents,
    store: &ConfigStore,
    country_code: &str,
) {
    if components.contains(Component::CountyCode) {
        return;
    }
    let Some(county) = components.get(Component::County) else {
        return;
    };
    let code = store
        .county_codes(country_code)
        .and_then(|table| table.find_by_name(county))
        .map(|entry| entry.code.as_str());
    if let Some(code) = code {
        tracing::trace!(county_code = code, "resolved county code");
        components.insert(Component::CountyCode, code);
    }
}
