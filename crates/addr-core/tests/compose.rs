use addr_core::{AddressComposer, compose};
use addr_model::{Component, RawComponents};
use addr_standards::{ConfigStore, embedded_store};

fn store() -> &'static ConfigStore {
    embedded_store().expect("embedded configuration loads")
}

fn raw(pairs: &[(&str, &str)]) -> RawComponents {
    pairs.iter().copied().collect()
}

fn format(pairs: &[(&str, &str)]) -> String {
    AddressComposer::new(store()).compose(&raw(pairs))
}

#[test]
fn united_states_address() {
    let formatted = format(&[
        ("road", "Main St"),
        ("city", "Springfield"),
        ("postcode", "62701"),
        ("country_code", "US"),
    ]);
    assert!(formatted.contains("Main St"));
    assert!(formatted.contains("Springfield"));
    assert!(formatted.contains("62701"));
    assert!(formatted.contains("United States"));
    assert!(formatted.ends_with('\n') && !formatted.ends_with("\n\n"));
    insta::assert_snapshot!(formatted.trim_end(), @r"
    Main St
    Springfield, 62701
    United States of America
    ");
}

#[test]
fn curacao_is_split_from_the_netherlands() {
    let input = raw(&[
        ("country_code", "NL"),
        ("state", "Curaçao"),
        ("city", "Willemstad"),
    ]);
    let composer = AddressComposer::new(store());
    let normalized = composer.normalize(&input);
    assert_eq!(normalized.components.country_code(), Some("CW"));
    assert_eq!(normalized.components.get(Component::Country), Some("Curaçao"));
    assert_eq!(normalized.effective_country, "NL");
    assert!(normalized.chain.is_inherited());

    assert_eq!(composer.compose(&input), "Willemstad\nCuraçao\n");
}

#[test]
fn washington_dc_state() {
    let input = raw(&[("state", "Washington, D.C."), ("country_code", "US")]);
    let composer = AddressComposer::new(store());
    let normalized = composer.normalize(&input);
    let components = &normalized.components;
    assert_eq!(components.get(Component::StateCode), Some("DC"));
    assert_eq!(components.get(Component::State), Some("District of Columbia"));
    assert_eq!(components.get(Component::City), Some("Washington"));

    assert_eq!(
        composer.compose(&input),
        "Washington\nDC\nUnited States of America\n"
    );
}

#[test]
fn without_country_code_values_are_joined() {
    assert_eq!(
        format(&[("city", "Anytown"), ("road", "Oak Ave")]),
        "Oak Ave Anytown\n"
    );
}

#[test]
fn free_function_uses_embedded_store() {
    let input = raw(&[("city", "Anytown"), ("road", "Oak Ave")]);
    assert_eq!(compose(&input).unwrap(), "Oak Ave Anytown\n");
}

#[test]
fn canonical_field_beats_alias() {
    let formatted = format(&[
        ("road", "Main St"),
        ("town", "Shelbyville"),
        ("city", "Springfield"),
        ("postcode", "62701"),
        ("country_code", "us"),
    ]);
    assert!(formatted.contains("Springfield, 62701"));
    assert!(!formatted.contains("Shelbyville"));
}

#[test]
fn alias_only_input_renders_through_alias() {
    let formatted = format(&[
        ("street", "Main St"),
        ("town", "Shelbyville"),
        ("postal_code", "62565"),
        ("country_code", "US"),
    ]);
    insta::assert_snapshot!(formatted.trim_end(), @r"
    Main St
    Shelbyville, 62565
    United States of America
    ");
}

#[test]
fn unknown_fields_become_attention() {
    let formatted = format(&[
        ("pub_name", "Moe's Tavern"),
        ("road", "Walnut St"),
        ("floor", "1"),
        ("city", "Springfield"),
        ("postcode", "62701"),
        ("country_code", "US"),
    ]);
    insta::assert_snapshot!(formatted.trim_end(), @r"
    Moe's Tavern 1
    Walnut St
    Springfield, 62701
    United States of America
    ");
}

#[test]
fn german_address() {
    let formatted = format(&[
        ("road", "Unter den Linden"),
        ("house_number", "77"),
        ("postcode", "10117"),
        ("city", "Berlin"),
        ("country_code", "de"),
    ]);
    insta::assert_snapshot!(formatted.trim_end(), @r"
    Unter den Linden 77
    10117 Berlin
    Germany
    ");
}

#[test]
fn british_address() {
    let formatted = format(&[
        ("house_number", "10"),
        ("road", "Downing Street"),
        ("city", "London"),
        ("postcode", "SW1A 2AA"),
        ("country_code", "GB"),
    ]);
    insta::assert_snapshot!(formatted.trim_end(), @r"
    10 Downing Street
    London
    SW1A 2AA
    United Kingdom
    ");
}

#[test]
fn puerto_rico_uses_us_rules() {
    let input = raw(&[
        ("road", "Calle Luna"),
        ("house_number", "15"),
        ("city", "San Juan"),
        ("postcode", "00901"),
        ("country_code", "pr"),
    ]);
    let composer = AddressComposer::new(store());
    let normalized = composer.normalize(&input);
    assert_eq!(normalized.components.country_code(), Some("PR"));
    assert_eq!(normalized.effective_country, "US");
    assert_eq!(
        normalized.components.get(Component::State),
        Some("Puerto Rico")
    );

    insta::assert_snapshot!(composer.compose(&input).trim_end(), @r"
    15 Calle Luna
    San Juan, PR 00901
    United States of America
    ");
}

#[test]
fn brazilian_address_with_state_code() {
    let formatted = format(&[
        ("road", "Avenida Paulista"),
        ("house_number", "1578"),
        ("suburb", "Bela Vista"),
        ("city", "São Paulo"),
        ("state", "São Paulo"),
        ("postcode", "01310-200"),
        ("country_code", "BR"),
    ]);
    insta::assert_snapshot!(formatted.trim_end(), @r"
    Avenida Paulista 1578
    Bela Vista
    São Paulo - SP
    01310-200
    Brazil
    ");
}

#[test]
fn brazilian_address_without_state_drops_dangling_dash() {
    let formatted = format(&[
        ("road", "Rua Augusta"),
        ("house_number", "500"),
        ("city", "Rio Claro"),
        ("postcode", "13500-000"),
        ("country_code", "BR"),
    ]);
    assert_eq!(formatted, "Rua Augusta 500\nRio Claro\n13500-000\nBrazil\n");
}

#[test]
fn italian_address_shows_province_code() {
    let formatted = format(&[
        ("road", "Via del Corso"),
        ("house_number", "1"),
        ("postcode", "00186"),
        ("city", "Roma"),
        ("county", "Roma"),
        ("country_code", "IT"),
    ]);
    assert_eq!(formatted, "Via del Corso 1\n00186 Roma RM\nItaly\n");
}

#[test]
fn abbreviation_is_opt_in() {
    let pairs = [
        ("house_number", "1600"),
        ("road", "Pennsylvania Avenue"),
        ("city", "Washington"),
        ("state", "DC"),
        ("postcode", "20500"),
        ("country_code", "US"),
    ];
    let composer = AddressComposer::new(store());

    let plain = composer.compose(&raw(&pairs));
    assert!(plain.starts_with("1600 Pennsylvania Avenue\n"));

    let abbreviated = composer.compose(&raw(&pairs).with_abbreviation(true));
    insta::assert_snapshot!(abbreviated.trim_end(), @r"
    1600 Pennsylvania Ave
    Washington, DC 20500
    United States of America
    ");
}

#[test]
fn abbreviation_flag_from_input_key() {
    let formatted = format(&[
        ("road", "Baker Street"),
        ("house_number", "221B"),
        ("city", "London"),
        ("postcode", "NW1 6XE"),
        ("country_code", "GB"),
        ("should_abbreviate", "true"),
    ]);
    assert!(formatted.starts_with("221B Baker St\n"));
}

#[test]
fn dutch_postformat_uses_local_country_name() {
    let formatted = format(&[
        ("road", "Damrak"),
        ("house_number", "1"),
        ("postcode", "1012 LG"),
        ("city", "Amsterdam"),
        ("country_code", "NL"),
    ]);
    assert_eq!(formatted, "Damrak 1\n1012 LG Amsterdam\nNederland\n");
}

#[test]
fn unknown_country_uses_default_rule() {
    let formatted = format(&[
        ("road", "Rruga e Kavajës"),
        ("house_number", "12"),
        ("postcode", "1001"),
        ("city", "Tirana"),
        ("country", "Shqipëria"),
        ("country_code", "al"),
    ]);
    assert_eq!(formatted, "Rruga e Kavajës 12\n1001 Tirana\nShqipëria\n");
    assert!(store().rule("AL").is_none());
    assert!(store().rule("JP").is_none());
}

#[test]
fn empty_input_formats_to_empty_string() {
    assert_eq!(format(&[]), "");
}

#[test]
fn json_input_values_are_stringified() {
    let input = RawComponents::from_json(&serde_json::json!({
        "house_number": 221,
        "road": "Baker Street",
        "city": "London",
        "postcode": "NW1 6XE",
        "county": null,
        "country_code": "gb",
        "should_abbreviate": true,
    }))
    .unwrap();
    assert!(input.should_abbreviate());
    assert_eq!(
        AddressComposer::new(store()).compose(&input),
        "221 Baker St\nLondon\nNW1 6XE\nUnited Kingdom\n"
    );
}
