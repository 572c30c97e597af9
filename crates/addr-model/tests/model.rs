use addr_model::{CaseInsensitiveSet, Component, ModelError, NormalizedComponents, RawComponents};
use serde_json::json;

#[test]
fn raw_components_keep_insertion_order_and_replace_in_place() {
    let mut raw = RawComponents::new();
    raw.insert("city", "Springfield");
    raw.insert("road", "Main St");
    raw.insert("city", "Shelbyville");

    let keys: Vec<&str> = raw.keys().collect();
    assert_eq!(keys, vec!["city", "road"]);
    assert_eq!(raw.get("city"), Some("Shelbyville"));
}

#[test]
fn abbreviation_key_sets_flag_instead_of_a_field() {
    let raw: RawComponents = [("road", "Main Street"), ("should_abbreviate", "true")]
        .into_iter()
        .collect();
    assert!(raw.should_abbreviate());
    assert!(!raw.contains_key("should_abbreviate"));
    assert_eq!(raw.len(), 1);
}

#[test]
fn from_json_stringifies_values() {
    let value = json!({
        "house_number": 742,
        "road": "Evergreen Terrace",
        "postcode": null,
        "should_abbreviate": true
    });
    let raw = RawComponents::from_json(&value).expect("object input");
    assert_eq!(raw.get("house_number"), Some("742"));
    assert_eq!(raw.get("road"), Some("Evergreen Terrace"));
    assert_eq!(raw.get("postcode"), Some(""));
    assert!(raw.should_abbreviate());
}

#[test]
fn from_json_keeps_document_key_order() {
    let value: serde_json::Value = serde_json::from_str(
        r#"{"zeta_field": "First", "alpha_field": "Second", "road": "Main St", "country_code": "US"}"#,
    )
    .unwrap();
    let raw = RawComponents::from_json(&value).unwrap();
    let keys: Vec<&str> = raw.keys().collect();
    assert_eq!(keys, vec!["zeta_field", "alpha_field", "road", "country_code"]);
}

#[test]
fn from_json_rejects_non_objects() {
    let err = RawComponents::from_json(&json!(["road"])).unwrap_err();
    assert!(matches!(err, ModelError::NotAnObject { kind: "an array" }));
}

#[test]
fn normalized_lookup_prefers_canonical_then_alias() {
    let mut components = NormalizedComponents::new();
    components.insert(Component::City, "Springfield");
    components.insert_alias("town", "Springfield Town");

    assert_eq!(components.lookup("city"), Some("Springfield"));
    assert_eq!(components.lookup("town"), Some("Springfield Town"));
    assert_eq!(components.lookup("village"), None);
}

#[test]
fn normalized_iteration_follows_schema_order() {
    let mut components = NormalizedComponents::new();
    components.insert(Component::Country, "Narnia");
    components.insert(Component::City, "Anytown");
    components.insert(Component::Road, "Oak Ave");

    let names: Vec<Component> = components.iter().map(|(c, _)| c).collect();
    assert_eq!(
        names,
        vec![Component::Road, Component::City, Component::Country]
    );
}

#[test]
fn insert_if_absent_never_overwrites() {
    let mut components = NormalizedComponents::new();
    components.insert(Component::Road, "Main St");
    components.insert_if_absent(Component::Road, "Other St");
    assert_eq!(components.get(Component::Road), Some("Main St"));
}

#[test]
fn retain_filters_canonical_and_alias_entries() {
    let mut components = NormalizedComponents::new();
    components.insert(Component::Road, "  ");
    components.insert(Component::City, "Anytown");
    components.insert_alias("town", "");
    components.retain(|_, value| !value.trim().is_empty());

    assert!(!components.contains(Component::Road));
    assert_eq!(components.alias("town"), None);
    assert_eq!(components.len(), 1);
}

#[test]
fn case_insensitive_set_handles_non_ascii() {
    let set = CaseInsensitiveSet::new(["Curaçao", "DC"]);
    assert!(set.contains("CURAÇAO"));
    assert!(set.contains("dc"));
    assert!(set.contains("curaçao"));
    assert!(!set.contains("Aruba"));
}
