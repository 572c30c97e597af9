//! Value cleanup after code resolution.

use std::sync::LazyLock;

use addr_model::{Component, NormalizedComponents};
use addr_standards::ConfigStore;
use regex::Regex;

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z][A-Za-z0-9+.\-]*://\S+").expect("Invalid URL regex")
});

/// Drop postcodes listing several values with `;`, and keep only the part
/// before the first `,`.
pub(crate) fn clean_postcode(components: &mut NormalizedComponents) {
    let Some(postcode) = components.get(Component::Postcode) else {
        return;
    };
    if postcode.contains(';') {
        components.remove(Component::Postcode);
    } else if let Some((head, _)) = postcode.split_once(',') {
        let head = head.to_string();
        components.insert(Component::Postcode, head);
    }
}

/// A purely numeric `country` is replaced by the `state`, when there is one.
pub(crate) fn country_from_state(components: &mut NormalizedComponents) {
    let numeric = components
        .get(Component::Country)
        .is_some_and(|country| !country.is_empty() && country.chars().all(|c| c.is_ascii_digit()));
    if !numeric {
        return;
    }
    if let Some(state) = components.get(Component::State).map(str::to_string) {
        components.insert(Component::Country, state);
    }
}

/// Name the country from its code when no `country` was given.
pub(crate) fn fill_country_name(components: &mut NormalizedComponents, store: &ConfigStore) {
    if components.contains(Component::Country) {
        return;
    }
    let name = components
        .country_code()
        .and_then(|code| store.country_name(code));
    if let Some(name) = name {
        components.insert(Component::Country, name);
    }
}

/// Remove blank values and values that are URLs.
pub(crate) fn prune(components: &mut NormalizedComponents) {
    components.retain(|_, value| !value.trim().is_empty() && !URL.is_match(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_filter_needs_a_scheme() {
        assert!(URL.is_match("https://example.com/a"));
        assert!(URL.is_match("see ftp://host"));
        assert!(!URL.is_match("example.com"));
        assert!(!URL.is_match("Suite: 5"));
    }

    #[test]
    fn prunes_blank_and_url_values() {
        let mut components = NormalizedComponents::new();
        components.insert(Component::Road, "Main St");
        components.insert(Component::City, "  ");
        components.insert(Component::House, "http://example.com");
        components.insert_alias("town", "");
        prune(&mut components);
        assert_eq!(components.len(), 1);
        assert!(components.alias("town").is_none());
    }
}
