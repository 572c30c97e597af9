//! Component normalization.
//!
//! Turns caller fields into canonical components. The steps run in a fixed
//! order, each on the output of the previous one:
//!
//! 1. uppercase `country_code`
//! 2. Dutch territory fixups (`NL` + state `Curaçao` becomes `CW`, ...)
//! 3. Washington, D.C. fixup
//! 4. rule chain: `use_country`, `change_country`, `replace`, `add_component`
//! 5. alias folding, unknown fields into `attention`
//! 6. state and county codes
//! 7. postcode cleanup
//! 8. numeric country replaced by the state
//! 9. country name from the country code
//! 10. pruning of blank and URL values
//! 11. abbreviation, when requested

mod abbreviate;
mod aliases;
mod cleanup;
mod codes;
mod fixups;
mod rules;

use addr_model::{Component, NormalizedComponents, RawComponents};
use addr_standards::ConfigStore;

use crate::resolver::RuleChain;

pub use aliases::{SMALL_DISTRICT_COUNTRIES, is_small_district_country};

/// Result of normalizing one set of raw fields.
#[derive(Debug, Clone)]
pub struct Normalized<'a> {
    pub components: NormalizedComponents,
    /// Rules resolved from the fixed-up country code.
    pub chain: RuleChain<'a>,
    /// Country whose code tables and languages apply. Differs from the
    /// `country_code` component when a rule names a `use_country`.
    pub effective_country: String,
}

/// Runs the normalization steps against one configuration store.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    store: &'a ConfigStore,
}

impl<'a> Normalizer<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    pub fn normalize(&self, raw: &RawComponents) -> Normalized<'a> {
        let mut fields = raw.clone();
        if let Some(code) = fields.get_mut(Component::CountryCode.as_str()) {
            *code = code.trim().to_uppercase();
        }

        fixups::fix_country(&mut fields);
        fixups::fix_state(&mut fields);

        let country_code = fields
            .get(Component::CountryCode.as_str())
            .unwrap_or_default()
            .to_string();
        let chain = RuleChain::resolve(self.store, &country_code);
        let effective_country =
            rules::apply_rule_chain(&mut fields, &chain).unwrap_or(country_code);
        tracing::trace!(fields = ?fields, country = %effective_country, "applied formatting rules");

        let mut components = aliases::fold_aliases(&fields, self.store.schema(), &effective_country);
        tracing::trace!(components = ?components, "folded aliases");

        codes::resolve_state_code(&mut components, self.store, &effective_country);
        codes::resolve_county_code(&mut components, self.store, &effective_country);

        cleanup::clean_postcode(&mut components);
        cleanup::country_from_state(&mut components);
        cleanup::fill_country_name(&mut components, self.store);
        cleanup::prune(&mut components);

        if raw.should_abbreviate() {
            abbreviate::abbreviate(&mut components, self.store, &effective_country);
        }
        tracing::trace!(components = ?components, "normalized components");

        Normalized {
            components,
            chain,
            effective_country,
        }
    }
}
