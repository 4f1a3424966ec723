// crates/meetup-core/src/locations.rs - Venue table and built-in defaults

use serde::{Deserialize, Serialize};

/// A venue the meetup can be held at, referenced by table index.
///
/// The table is fixed at build time and never mutated; resolution copies
/// the selected row's fields into the article parameters verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Short label used in the article summary line.
    pub short: String,
    /// Full venue name.
    pub name: String,
    /// Street address.
    pub street: String,
    /// City/region/postal/country string.
    pub city: String,
    /// Coordinates as "lat;lon", matching the article's Event-geo field.
    pub geo: String,
}

/// The fixed, ordered venue list. Index 0 is the default venue.
pub fn location_table() -> Vec<LocationRecord> {
    vec![LocationRecord {
        short: "Lucky Lab on Quimby".to_string(),
        name: "Lucky Labrador Beer Hall".to_string(),
        street: "1945 NW Quimby St".to_string(),
        city: "Portland, Oregon 97209 US".to_string(),
        geo: "45.53371;-122.69174".to_string(),
    }]
}

/// Built-in fallbacks for every field the resolver can prompt for.
///
/// Constructed once at startup and passed explicitly into the resolver.
/// The author default comes from the CLI (the invoking user's name); the
/// rest are the meetup's standing schedule.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub author: String,
    pub start_time: String,
    pub end_time: String,
    pub time_zone: String,
    pub url: String,
    pub location: usize,
}

impl Defaults {
    /// Standing meetup defaults with the given author name.
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            start_time: "18:00:00".to_string(),
            end_time: "21:00:00".to_string(),
            time_zone: "US/Pacific".to_string(),
            url: "https://ikluft.github.io/pdx-lkmu/".to_string(),
            location: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_a_default_venue() {
        let table = location_table();
        assert!(!table.is_empty());
        assert_eq!(table[0].name, "Lucky Labrador Beer Hall");
        assert_eq!(table[0].geo, "45.53371;-122.69174");
    }

    #[test]
    fn test_defaults_carry_the_author() {
        let defaults = Defaults::new("Pat Example");
        assert_eq!(defaults.author, "Pat Example");
        assert_eq!(defaults.start_time, "18:00:00");
        assert_eq!(defaults.location, 0);
    }
}
