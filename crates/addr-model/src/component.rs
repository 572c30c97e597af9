//! Canonical address component names.
//!
//! The set is closed: every value a template or a rule table can address by a
//! canonical name is one of these variants. Alias names (`town`, `suburb`, ...)
//! are not part of the enumeration; they are resolved through the component
//! schema at the input boundary.
//!
//! Variant order is significant. It is the order in which components are
//! listed by the component schema and the order in which a template-less
//! address joins its values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A canonical address component name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Attention,
    House,
    HouseNumber,
    Road,
    Place,
    Hamlet,
    Village,
    Neighbourhood,
    CityDistrict,
    District,
    PostalCity,
    City,
    Municipality,
    County,
    CountyCode,
    StateDistrict,
    Postcode,
    State,
    StateCode,
    Region,
    Island,
    Archipelago,
    Country,
    CountryCode,
    Continent,
}

impl Component {
    /// Every canonical component, in schema order.
    pub const ALL: [Component; 25] = [
        Component::Attention,
        Component::House,
        Component::HouseNumber,
        Component::Road,
        Component::Place,
        Component::Hamlet,
        Component::Village,
        Component::Neighbourhood,
        Component::CityDistrict,
        Component::District,
        Component::PostalCity,
        Component::City,
        Component::Municipality,
        Component::County,
        Component::CountyCode,
        Component::StateDistrict,
        Component::Postcode,
        Component::State,
        Component::StateCode,
        Component::Region,
        Component::Island,
        Component::Archipelago,
        Component::Country,
        Component::CountryCode,
        Component::Continent,
    ];

    /// The snake_case name used in input maps, templates and rule tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Component::Attention => "attention",
            Component::House => "house",
            Component::HouseNumber => "house_number",
            Component::Road => "road",
            Component::Place => "place",
            Component::Hamlet => "hamlet",
            Component::Village => "village",
            Component::Neighbourhood => "neighbourhood",
            Component::CityDistrict => "city_district",
            Component::District => "district",
            Component::PostalCity => "postal_city",
            Component::City => "city",
            Component::Municipality => "municipality",
            Component::County => "county",
            Component::CountyCode => "county_code",
            Component::StateDistrict => "state_district",
            Component::Postcode => "postcode",
            Component::State => "state",
            Component::StateCode => "state_code",
            Component::Region => "region",
            Component::Island => "island",
            Component::Archipelago => "archipelago",
            Component::Country => "country",
            Component::CountryCode => "country_code",
            Component::Continent => "continent",
        }
    }

    /// Parse a canonical name, returning `None` for aliases and unknown keys.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ModelError::UnknownComponent {
            name: s.to_string(),
        })
    }
}
