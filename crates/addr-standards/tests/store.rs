use std::fs;

use addr_model::{CaseInsensitiveSet, Component};
use addr_standards::{
    ConfigSources, ConfigStore, ReplaceTarget, StandardsError, embedded_store,
};

fn minimal_sources() -> ConfigSources {
    ConfigSources {
        worldwide: "\
generic: &generic |
    {{{road}}}
    {{{city}}}
default:
    address_template: *generic
    fallback_template: |
        {{{city}}}
XX:
    use_country: YY
"
        .to_string(),
        components: "name: road\n---\nname: city\naliases:\n  - town\n".to_string(),
        ..ConfigSources::default()
    }
}

#[test]
fn embedded_store_loads_every_table() {
    let store = ConfigStore::load_embedded().expect("embedded data is valid");
    let summary = store.summary();

    assert!(summary.countries > 10);
    assert_eq!(summary.components, Component::ALL.len());
    assert!(summary.aliases > 20);
    assert!(summary.state_codes > 0);
    assert!(summary.county_codes > 0);
    assert_eq!(
        summary.abbreviation_languages,
        vec!["de", "en", "es", "fr", "nl"]
    );
}

#[test]
fn embedded_store_is_shared() {
    let first = embedded_store().expect("embedded data is valid");
    let second = embedded_store().expect("embedded data is valid");
    assert!(std::ptr::eq(first, second));
}

#[test]
fn shared_template_bodies_are_not_rules() {
    let store = ConfigStore::load_embedded().unwrap();
    assert!(store.rule("generic1").is_none());
    assert!(store.rule("fallback1").is_none());
    assert!(store.rule("US").is_some());
    assert!(store.rule("us").is_some());
}

#[test]
fn dependent_territories_borrow_parent_rules() {
    let store = ConfigStore::load_embedded().unwrap();

    let cw = store.rule("CW").unwrap();
    assert_eq!(cw.use_country.as_deref(), Some("NL"));
    assert_eq!(cw.change_country.as_deref(), Some("Curaçao"));
    assert!(cw.address_template.is_none());

    let pr = store.rule("PR").unwrap();
    let assignment = pr.add_component.as_ref().unwrap();
    assert_eq!(assignment.component, Component::State);
    assert_eq!(assignment.value, "PR");
}

#[test]
fn us_rules_carry_targeted_replacements() {
    let store = ConfigStore::load_embedded().unwrap();
    let us = store.rule("US").unwrap();
    assert_eq!(
        us.replace[0].target,
        ReplaceTarget::Component("state".to_string())
    );
    assert_eq!(us.postformat_replace.len(), 3);
    assert_eq!(
        us.postformat_replace[1].apply("Springfield\nUSA\n"),
        "Springfield\nUnited States of America\n"
    );
}

#[test]
fn lookups_by_country() {
    let store = ConfigStore::load_embedded().unwrap();

    let us = store.state_codes("US").unwrap();
    let dc = us
        .find_by_code_or_name(&CaseInsensitiveSet::new(["district of columbia"]))
        .unwrap();
    assert_eq!(dc.code, "DC");

    let it = store.county_codes("IT").unwrap();
    assert_eq!(it.find_by_name("rome").map(|e| e.code.as_str()), Some("RM"));

    assert_eq!(
        store.languages("ch").map(<[String]>::to_vec),
        Some(vec![
            "de".to_string(),
            "fr".to_string(),
            "it".to_string(),
            "rm".to_string()
        ])
    );
    assert!(store.abbreviations("EN").is_some());
    assert!(store.abbreviations("pt").is_none());
    assert_eq!(store.country_name("us"), Some("United States of America"));
    assert_eq!(
        store.schema().canonical_for_alias("town"),
        Some(Component::City)
    );
}

#[test]
fn optional_tables_may_be_absent() {
    let store = ConfigStore::from_sources(&minimal_sources()).unwrap();
    assert!(store.state_codes("US").is_none());
    assert!(store.languages("US").is_none());
    assert_eq!(store.rule("XX").unwrap().use_country.as_deref(), Some("YY"));
    assert!(store.default_rule().fallback_template.is_some());
}

#[test]
fn missing_default_rule_is_rejected() {
    let sources = ConfigSources {
        worldwide: "US:\n    address_template: x\n".to_string(),
        ..minimal_sources()
    };
    let err = ConfigStore::from_sources(&sources).unwrap_err();
    assert!(matches!(err, StandardsError::MissingDefaultRule { .. }));
}

#[test]
fn malformed_templates_fail_at_load() {
    let sources = ConfigSources {
        worldwide: "default:\n    address_template: \"{{#road}} {{{road}}}\"\n".to_string(),
        ..minimal_sources()
    };
    let err = ConfigStore::from_sources(&sources).unwrap_err();
    assert!(matches!(
        err,
        StandardsError::Template { field: "address_template", .. }
    ));
}

#[test]
fn invalid_patterns_fail_at_load() {
    let sources = ConfigSources {
        worldwide: "\
default:
    address_template: x
DE:
    replace:
        - [\"(unclosed\", \"\"]
"
        .to_string(),
        ..minimal_sources()
    };
    let err = ConfigStore::from_sources(&sources).unwrap_err();
    assert!(matches!(err, StandardsError::Pattern { .. }));
    assert!(err.to_string().contains("(unclosed"));
}

#[test]
fn add_component_must_name_a_component() {
    let sources = ConfigSources {
        worldwide: "\
default:
    address_template: x
PR:
    add_component: planet=Earth
"
        .to_string(),
        ..minimal_sources()
    };
    let err = ConfigStore::from_sources(&sources).unwrap_err();
    assert!(matches!(err, StandardsError::UnknownComponent { name, .. } if name == "planet"));
}

#[test]
fn loads_configuration_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let sources = minimal_sources();
    fs::create_dir_all(root.join("countries")).unwrap();
    fs::create_dir_all(root.join("abbreviations")).unwrap();
    fs::write(root.join("countries/worldwide.yaml"), &sources.worldwide).unwrap();
    fs::write(root.join("components.yaml"), &sources.components).unwrap();
    fs::write(root.join("country2lang.yaml"), "US: en\n").unwrap();
    fs::write(root.join("abbreviations/en.yaml"), "road:\n    Street: St\n").unwrap();
    fs::write(root.join("abbreviations/README.txt"), "ignored").unwrap();

    let store = ConfigStore::load_from_dir(root).unwrap();
    let summary = store.summary();
    assert_eq!(summary.countries, 1);
    assert_eq!(summary.components, 2);
    assert_eq!(summary.abbreviation_languages, vec!["en"]);
    assert_eq!(summary.abbreviation_rules, 1);
}

#[test]
fn missing_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = ConfigStore::load_from_dir(&missing).unwrap_err();
    assert!(matches!(err, StandardsError::DirectoryNotFound { path } if path == missing));
}

#[test]
fn missing_required_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigStore::load_from_dir(dir.path()).unwrap_err();
    match err {
        StandardsError::Io { path, .. } => assert!(path.ends_with("countries/worldwide.yaml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn summary_serializes_as_json() {
    let store = ConfigStore::from_sources(&minimal_sources()).unwrap();
    let json = serde_json::to_value(store.summary()).unwrap();
    assert_eq!(json["countries"], 1);
    assert_eq!(json["aliases"], 1);
}
