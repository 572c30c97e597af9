//! Output for the `addr` subcommands.

use std::fmt;

use addr_core::AddressComposer;
use addr_model::RawComponents;
use addr_standards::{ConfigStore, FormattingRule};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

/// Where a country's address template comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// The country's own rule defines a template.
    Own,
    /// Taken from the `use_country` target.
    Inherited,
    /// Falls through to the default rule.
    Default,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Own => "own",
            Self::Inherited => "inherited",
            Self::Default => "default",
        })
    }
}

/// One line of the `countries` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRow {
    pub code: String,
    pub name: Option<String>,
    pub template: TemplateKind,
    pub use_country: Option<String>,
    pub replace_rules: usize,
    pub postformat_rules: usize,
}

fn has_template(rule: &FormattingRule) -> bool {
    rule.address_template.is_some() || rule.fallback_template.is_some()
}

/// Rows for every country rule in the store, ordered by code.
pub fn country_rows(store: &ConfigStore) -> Vec<CountryRow> {
    store
        .rules()
        .map(|(code, rule)| {
            let target = rule.use_country.as_deref().and_then(|target| store.rule(target));
            let template = if has_template(rule) {
                TemplateKind::Own
            } else if target.is_some_and(has_template) {
                TemplateKind::Inherited
            } else {
                TemplateKind::Default
            };
            CountryRow {
                code: code.to_string(),
                name: store.country_name(code).map(str::to_string),
                template,
                use_country: rule.use_country.clone(),
                replace_rules: rule.replace.len(),
                postformat_rules: rule.postformat_replace.len(),
            }
        })
        .collect()
}

pub fn countries_table(rows: &[CountryRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Code"),
        Cell::new("Country"),
        Cell::new("Template"),
        Cell::new("Uses"),
        Cell::new("Replace").set_alignment(CellAlignment::Right),
        Cell::new("Postformat").set_alignment(CellAlignment::Right),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.code),
            Cell::new(row.name.as_deref().unwrap_or("-")),
            Cell::new(row.template),
            Cell::new(row.use_country.as_deref().unwrap_or("-")),
            Cell::new(row.replace_rules).set_alignment(CellAlignment::Right),
            Cell::new(row.postformat_rules).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

/// Format every input, separating addresses with a blank line.
///
/// `abbreviate` forces abbreviation on; inputs that carry their own
/// `should_abbreviate` flag keep it otherwise.
pub fn format_addresses(
    composer: &AddressComposer<'_>,
    inputs: &[RawComponents],
    abbreviate: bool,
) -> String {
    inputs
        .iter()
        .map(|raw| {
            if abbreviate && !raw.should_abbreviate() {
                composer.compose(&raw.clone().with_abbreviation(true))
            } else {
                composer.compose(raw)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
