//! Component schema (`components.yaml`).
//!
//! A multi-document stream, one document per canonical component:
//!
//! ```yaml
//! name: city
//! aliases:
//!   - town
//!   - township
//! ---
//! name: postcode
//! ```

use std::collections::HashMap;

use addr_model::Component;
use serde::Deserialize;

use crate::error::{Result, StandardsError};

#[derive(Debug, Deserialize)]
struct RawSchemaEntry {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
}

/// One canonical component and the input keys that fold into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub component: Component,
    pub aliases: Vec<String>,
}

/// Canonical component names and their aliases.
#[derive(Debug, Clone, Default)]
pub struct ComponentSchema {
    entries: Vec<SchemaEntry>,
    alias_index: HashMap<String, Component>,
}

impl ComponentSchema {
    /// Parse a `components.yaml` stream.
    ///
    /// # Errors
    ///
    /// Fails on malformed YAML or a document naming an unknown component.
    pub fn parse(text: &str, origin: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for document in serde_yaml::Deserializer::from_str(text) {
            let value = serde_yaml::Value::deserialize(document)
                .map_err(|e| StandardsError::yaml(origin, e))?;
            if value.is_null() {
                continue;
            }
            let raw: RawSchemaEntry =
                serde_yaml::from_value(value).map_err(|e| StandardsError::yaml(origin, e))?;
            let component =
                Component::parse(&raw.name).ok_or_else(|| StandardsError::UnknownComponent {
                    name: raw.name.clone(),
                    origin: origin.to_string(),
                })?;
            entries.push(SchemaEntry {
                component,
                aliases: raw.aliases,
            });
        }
        Ok(Self::from_entries(entries))
    }

    /// Build a schema from entries. When an alias is listed under several
    /// components, the first listing wins.
    pub fn from_entries(entries: Vec<SchemaEntry>) -> Self {
        let mut alias_index = HashMap::new();
        for entry in &entries {
            for alias in &entry.aliases {
                alias_index
                    .entry(alias.clone())
                    .or_insert(entry.component);
            }
        }
        Self {
            entries,
            alias_index,
        }
    }

    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    /// The canonical component an alias folds into.
    pub fn canonical_for_alias(&self, key: &str) -> Option<Component> {
        self.alias_index.get(key).copied()
    }

    pub fn alias_count(&self) -> usize {
        self.alias_index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = "\
name: city
aliases:
  - town
  - township
---
name: postcode
---
name: neighbourhood
aliases:
  - suburb
  - town
";

    #[test]
    fn parses_documents_in_order() {
        let schema = ComponentSchema::parse(SCHEMA, "components.yaml").unwrap();
        let names: Vec<_> = schema.entries().iter().map(|e| e.component).collect();
        assert_eq!(
            names,
            vec![Component::City, Component::Postcode, Component::Neighbourhood]
        );
    }

    #[test]
    fn first_listing_of_an_alias_wins() {
        let schema = ComponentSchema::parse(SCHEMA, "components.yaml").unwrap();
        assert_eq!(schema.canonical_for_alias("town"), Some(Component::City));
        assert_eq!(
            schema.canonical_for_alias("suburb"),
            Some(Component::Neighbourhood)
        );
        assert_eq!(schema.canonical_for_alias("city"), None);
        assert_eq!(schema.canonical_for_alias("township"), Some(Component::City));
        assert_eq!(schema.canonical_for_alias("galaxy"), None);
    }

    #[test]
    fn rejects_unknown_canonical_names() {
        let err = ComponentSchema::parse("name: galaxy\n", "components.yaml").unwrap_err();
        assert!(matches!(err, StandardsError::UnknownComponent { name, .. } if name == "galaxy"));
    }
}
