//! Country and state fixups applied before any rule lookup.

use std::sync::LazyLock;

use addr_model::{Component, RawComponents};
use regex::{Regex, RegexBuilder};

static SINT_MAARTEN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new("sint maarten")
        .case_insensitive(true)
        .build()
        .expect("Invalid Sint Maarten regex")
});

static ARUBA: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new("aruba")
        .case_insensitive(true)
        .build()
        .expect("Invalid Aruba regex")
});

static WASHINGTON_DC: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^washington,? d\.?c\.?")
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .expect("Invalid Washington DC regex")
});

/// Territories geocoded as a Dutch `state`: `(code, country name)`.
fn dutch_territory(state: &str) -> Option<(&'static str, &'static str)> {
    if state == "Curaçao" {
        Some(("CW", "Curaçao"))
    } else if SINT_MAARTEN.is_match(state) {
        Some(("SX", "Sint Maarten"))
    } else if ARUBA.is_match(state) {
        Some(("AW", "Aruba"))
    } else {
        None
    }
}

/// Rewrite `NL` addresses whose state is a Caribbean territory to that
/// territory's own country code. Returns the new code.
pub(crate) fn fix_country(fields: &mut RawComponents) -> Option<&'static str> {
    if fields.get(Component::CountryCode.as_str()) != Some("NL") {
        return None;
    }
    let (code, country) = dutch_territory(fields.get(Component::State.as_str())?)?;
    tracing::debug!(country_code = code, "state names a Dutch territory");
    fields.insert(Component::CountryCode.as_str(), code);
    fields.insert(Component::Country.as_str(), country);
    Some(code)
}

/// Expand "Washington, D.C." style states to the district and its city.
pub(crate) fn fix_state(fields: &mut RawComponents) -> bool {
    let is_dc = fields
        .get(Component::State.as_str())
        .is_some_and(|state| WASHINGTON_DC.is_match(state));
    if is_dc {
        tracing::debug!("state names Washington, D.C.");
        fields.insert(Component::StateCode.as_str(), "DC");
        fields.insert(Component::State.as_str(), "District of Columbia");
        fields.insert(Component::City.as_str(), "Washington");
    }
    is_dc
}
