//! Per-country formatting rules (`countries/worldwide.yaml`).
//!
//! ```yaml
//! generic1: &generic1 |
//!     {{{road}}} {{{house_number}}}
//!     {{{postcode}}} {{{city}}}
//! default:
//!     address_template: *generic1
//! PR:
//!     use_country: US
//!     change_country: United States of America
//!     add_component: state=PR
//! ```
//!
//! Top-level string entries are shared template bodies referenced through
//! YAML anchors and are not rules themselves.

use std::collections::BTreeMap;

use addr_model::Component;
use addr_template::Template;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{Result, StandardsError};
use crate::yaml::{parse_mapping, string_entries};

/// Key of the catch-all rule.
pub const DEFAULT_RULE_KEY: &str = "default";

/// Which values a [`Replacement`] rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceTarget {
    /// Every component value.
    AllComponents,
    /// Only the named input field.
    Component(String),
}

/// One ordered regex substitution.
#[derive(Debug, Clone)]
pub struct Replacement {
    pub target: ReplaceTarget,
    pub pattern: Regex,
    /// Replacement in `regex` syntax (`$1` already rewritten to `${1}`).
    pub replacement: String,
}

impl Replacement {
    /// Apply to every match in `value`.
    pub fn apply(&self, value: &str) -> String {
        self.pattern
            .replace_all(value, self.replacement.as_str())
            .into_owned()
    }
}

/// `add_component: name=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentAssignment {
    pub component: Component,
    pub value: String,
}

/// Formatting rule for one country code.
#[derive(Debug, Clone, Default)]
pub struct FormattingRule {
    pub address_template: Option<Template>,
    pub fallback_template: Option<Template>,
    pub use_country: Option<String>,
    pub change_country: Option<String>,
    pub add_component: Option<ComponentAssignment>,
    pub replace: Vec<Replacement>,
    pub postformat_replace: Vec<Replacement>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFormattingRule {
    address_template: Option<String>,
    fallback_template: Option<String>,
    use_country: Option<String>,
    change_country: Option<String>,
    add_component: Option<String>,
    #[serde(default)]
    replace: Vec<(String, String)>,
    #[serde(default)]
    postformat_replace: Vec<(String, String)>,
}

/// Parsed `worldwide.yaml`: the default rule plus rules keyed by country code.
#[derive(Debug, Clone)]
pub struct RuleTable {
    pub default_rule: FormattingRule,
    pub rules: BTreeMap<String, FormattingRule>,
}

/// Parse the worldwide rule table.
///
/// # Errors
///
/// Fails on malformed YAML, a missing `default` entry, unparsable templates,
/// invalid regex patterns or malformed `add_component` values.
pub fn parse_rules(text: &str, origin: &str) -> Result<RuleTable> {
    let mut default_rule = None;
    let mut rules = BTreeMap::new();

    for (key, value) in string_entries(parse_mapping(text, origin)?, origin)? {
        if !matches!(value, Value::Mapping(_)) {
            continue;
        }
        let raw: RawFormattingRule = serde_yaml::from_value(value)
            .map_err(|e| StandardsError::yaml(format!("{origin} ({key})"), e))?;
        let rule = build_rule(&key, raw)?;
        if key == DEFAULT_RULE_KEY {
            default_rule = Some(rule);
        } else {
            rules.insert(key.to_uppercase(), rule);
        }
    }

    let default_rule = default_rule.ok_or_else(|| StandardsError::MissingDefaultRule {
        origin: origin.to_string(),
    })?;
    tracing::debug!(countries = rules.len(), "parsed formatting rules");
    Ok(RuleTable {
        default_rule,
        rules,
    })
}

fn build_rule(country: &str, raw: RawFormattingRule) -> Result<FormattingRule> {
    Ok(FormattingRule {
        address_template: parse_template(country, "address_template", raw.address_template)?,
        fallback_template: parse_template(country, "fallback_template", raw.fallback_template)?,
        use_country: raw.use_country.map(|code| code.trim().to_uppercase()),
        change_country: raw.change_country,
        add_component: raw
            .add_component
            .map(|value| parse_assignment(country, &value))
            .transpose()?,
        replace: raw
            .replace
            .iter()
            .map(|(from, to)| parse_replacement(country, from, to, true))
            .collect::<Result<_>>()?,
        postformat_replace: raw
            .postformat_replace
            .iter()
            .map(|(from, to)| parse_replacement(country, from, to, false))
            .collect::<Result<_>>()?,
    })
}

fn parse_template(
    country: &str,
    field: &'static str,
    source: Option<String>,
) -> Result<Option<Template>> {
    source
        .map(|source| {
            Template::parse(&source).map_err(|e| StandardsError::Template {
                country: country.to_string(),
                field,
                source: e,
            })
        })
        .transpose()
}

fn parse_assignment(country: &str, value: &str) -> Result<ComponentAssignment> {
    let invalid = || StandardsError::InvalidAssignment {
        country: country.to_string(),
        value: value.to_string(),
    };
    let (name, assigned) = value.split_once('=').ok_or_else(invalid)?;
    let component = Component::parse(name.trim()).ok_or_else(|| StandardsError::UnknownComponent {
        name: name.trim().to_string(),
        origin: format!("add_component for {country}"),
    })?;
    Ok(ComponentAssignment {
        component,
        value: assigned.to_string(),
    })
}

/// Build one substitution. In component-value rules a pattern of the form
/// `name=regex` targets a single field.
fn parse_replacement(
    country: &str,
    from: &str,
    to: &str,
    allow_component_target: bool,
) -> Result<Replacement> {
    let (target, pattern) = match from.split_once('=') {
        Some((name, pattern)) if allow_component_target => {
            (ReplaceTarget::Component(name.to_string()), pattern)
        }
        _ => (ReplaceTarget::AllComponents, from),
    };
    Ok(Replacement {
        target,
        pattern: compile_pattern(pattern, &format!("rules for {country}"))?,
        replacement: translate_backreferences(to),
    })
}

/// Compile a rule-table pattern. `^` and `$` anchor at line boundaries, as
/// the rule tables expect.
pub(crate) fn compile_pattern(pattern: &str, scope: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .build()
        .map_err(|e| StandardsError::Pattern {
            scope: scope.to_string(),
            pattern: pattern.to_string(),
            source: e,
        })
}

/// Rewrite `$1`-style backreferences as `${1}` and escape any other `$`.
pub fn translate_backreferences(replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len() + 4);
    let mut chars = replacement.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '$' {
            out.push(ch);
            continue;
        }
        let mut digits = String::new();
        while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
            digits.push(d);
            chars.next();
        }
        if digits.is_empty() {
            out.push_str("$$");
        } else {
            out.push_str("${");
            out.push_str(&digits);
            out.push('}');
        }
    }
    out
}
