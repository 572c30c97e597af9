//! Application of the resolved rule chain to the raw fields.

use addr_model::{Component, RawComponents};
use addr_standards::{ReplaceTarget, Replacement};

use crate::resolver::RuleChain;

const STATE_PLACEHOLDER: &str = "$state";

/// Apply every rule of the chain in order. Returns the `use_country` code,
/// which replaces the effective country for table lookups.
pub(crate) fn apply_rule_chain(fields: &mut RawComponents, chain: &RuleChain<'_>) -> Option<String> {
    let mut use_country = None;
    for rule in chain.iter() {
        if let Some(code) = &rule.use_country {
            use_country = Some(code.clone());
        }
        if let Some(country) = &rule.change_country {
            let state = fields.get(Component::State.as_str()).unwrap_or_default();
            let country = country.replace(STATE_PLACEHOLDER, state);
            fields.insert(Component::Country.as_str(), country);
        }
        apply_replacements(fields, &rule.replace);
        if let Some(assignment) = &rule.add_component {
            fields.insert(assignment.component.as_str(), assignment.value.clone());
        }
    }
    use_country
}

/// Run substitutions over field values. Untargeted substitutions skip
/// `country_code`.
pub(crate) fn apply_replacements(fields: &mut RawComponents, replacements: &[Replacement]) {
    for replacement in replacements {
        match &replacement.target {
            ReplaceTarget::Component(name) => {
                if let Some(value) = fields.get_mut(name) {
                    *value = replacement.apply(value);
                }
            }
            ReplaceTarget::AllComponents => {
                for (key, value) in fields.values_mut() {
                    if key != Component::CountryCode.as_str() {
                        *value = replacement.apply(value);
                    }
                }
            }
        }
    }
}
