//! Seed record types and sources.
//!
//! Records come from two places, inserted in this order: the JSON dataset at
//! [`default_seed_file`] (or a path given on the command line), then the
//! [`inline_records`] literal list.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::db::SeedError;

/// One restaurant as it appears in the seed JSON (camelCase keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRestaurant {
    pub name: String,
    pub city: String,
    pub address: String,
    pub cuisine: String,
    pub seating_capacity: i32,
    pub available_capacity: i32,
    pub available_reservations: Vec<String>,
    pub mood: String,
}

/// Path of the dataset shipped with this crate.
pub fn default_seed_file() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data/restaurants.json"))
}

/// Reads and parses a JSON array of seed restaurants, preserving file order.
pub fn load_seed_data(path: &Path) -> Result<Vec<SeedRestaurant>, SeedError> {
    let contents = fs::read_to_string(path).map_err(|source| SeedError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn restaurant(
    name: &str,
    city: &str,
    address: &str,
    cuisine: &str,
    seating_capacity: i32,
    available_capacity: i32,
    slots: &[&str],
    mood: &str,
) -> SeedRestaurant {
    SeedRestaurant {
        name: name.to_string(),
        city: city.to_string(),
        address: address.to_string(),
        cuisine: cuisine.to_string(),
        seating_capacity,
        available_capacity,
        available_reservations: slots.iter().map(|s| (*s).to_string()).collect(),
        mood: mood.to_string(),
    }
}

/// Restaurants added after the JSON dataset was frozen. Inserted after the
/// file records on every run.
pub fn inline_records() -> Vec<SeedRestaurant> {
    vec![
        restaurant(
            "The Gilded Fork",
            "Washington DC",
            "1220 Constitution Ave NW",
            "French",
            55,
            40,
            &["5:30 PM", "7:30 PM", "9:00 PM"],
            "sophisticated",
        ),
        restaurant(
            "Hana Sushi Bar",
            "Los Angeles",
            "8421 Melrose Ave",
            "Japanese",
            30,
            22,
            &["6:00 PM", "7:00 PM", "8:00 PM", "9:30 PM"],
            "casual",
        ),
        restaurant(
            "Trattoria Lucium",
            "Boston",
            "77 Salem St",
            "Italian",
            42,
            35,
            &["5:00 PM", "6:30 PM", "8:30 PM"],
            "romantic",
        ),
        restaurant(
            "Ember & Oak",
            "Chicago",
            "310 W Kinzie St",
            "Steakhouse",
            80,
            61,
            &["6:00 PM", "7:30 PM", "9:00 PM", "10:00 PM"],
            "lively",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_preserves_order_and_fields() {
        let json = r#"[
            {
                "name": "Casa Verde",
                "city": "San Francisco",
                "address": "100 Mission St",
                "cuisine": "Mexican",
                "seatingCapacity": 40,
                "availableCapacity": 28,
                "availableReservations": ["6:00 PM", "8:00 PM"],
                "mood": "casual"
            },
            {
                "name": "Bluefin",
                "city": "New York",
                "address": "12 W 44th St",
                "cuisine": "Japanese",
                "seatingCapacity": 25,
                "availableCapacity": 25,
                "availableReservations": ["7:00 PM"],
                "mood": "sophisticated"
            }
        ]"#;

        let records: Vec<SeedRestaurant> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Casa Verde");
        assert_eq!(records[0].seating_capacity, 40);
        assert_eq!(
            records[0].available_reservations,
            vec!["6:00 PM".to_string(), "8:00 PM".to_string()]
        );
        assert_eq!(records[1].name, "Bluefin");
    }

    #[test]
    fn test_missing_file_is_file_read_error() {
        let err = load_seed_data(Path::new("/nonexistent/restaurants.json")).unwrap_err();
        assert!(matches!(err, SeedError::FileRead { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not an array").unwrap();
        let err = load_seed_data(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::Parse { .. }));
    }

    #[test]
    fn test_shipped_dataset_parses() {
        let records = load_seed_data(default_seed_file()).unwrap();
        assert!(!records.is_empty());
        for record in &records {
            assert!(record.seating_capacity > 0, "{}", record.name);
            assert!(
                record.available_capacity <= record.seating_capacity,
                "{}",
                record.name
            );
        }
    }

    #[test]
    fn test_inline_records_are_well_formed() {
        let records = inline_records();
        assert!(!records.is_empty());
        for record in &records {
            assert!(!record.available_reservations.is_empty(), "{}", record.name);
            assert!(record.available_capacity <= record.seating_capacity);
        }
    }
}
