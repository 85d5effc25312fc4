//! Normalization of free-text customer input against the seeded data.
//!
//! Customers say "nyc" or "san fran"; the database stores "New York" and
//! "San Francisco". The [`Catalog`] caches the distinct cities, cuisines, and
//! moods present in the `restaurants` table and maps variations onto them.

use std::collections::{HashMap, HashSet};

use sqlx::PgPool;
use tracing::info;

/// Common shorthand for cities in the seed dataset. Only variations whose
/// canonical city actually exists in the catalog are registered.
const CITY_VARIATIONS: &[(&str, &[&str])] = &[
    ("new york", &["nyc", "new york city", "manhattan"]),
    ("los angeles", &["la", "l.a.", "lax"]),
    ("san francisco", &["sf", "san fran"]),
    ("las vegas", &["vegas"]),
    ("washington dc", &["washington d.c.", "dc", "d.c."]),
];

/// Occasions map onto the free-text `mood` column for recommendations.
pub fn mood_for_occasion(occasion: &str) -> Option<&'static str> {
    let occasion = occasion.to_lowercase();
    let mapping = [
        ("date", "romantic"),
        ("business", "sophisticated"),
        ("family", "casual"),
        ("friends", "casual"),
        ("celebration", "lively"),
    ];
    mapping
        .iter()
        .find(|(key, _)| occasion.contains(key))
        .map(|(_, mood)| *mood)
}

/// Distinct values present in the restaurants table, loaded once after
/// seeding. All entries are stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cities: HashSet<String>,
    cuisines: HashSet<String>,
    moods: HashSet<String>,
    city_aliases: HashMap<String, String>,
}

impl Catalog {
    /// Builds a catalog from known value lists. Inputs are lowercased; alias
    /// mappings are derived from [`CITY_VARIATIONS`].
    pub fn from_values<S: AsRef<str>>(cities: &[S], cuisines: &[S], moods: &[S]) -> Self {
        let lower =
            |values: &[S]| -> HashSet<String> {
                values.iter().map(|v| v.as_ref().to_lowercase()).collect()
            };

        let cities = lower(cities);
        let mut city_aliases: HashMap<String, String> =
            cities.iter().map(|c| (c.clone(), c.clone())).collect();
        for (canonical, variations) in CITY_VARIATIONS {
            if cities.contains(*canonical) {
                for variation in *variations {
                    city_aliases.insert((*variation).to_string(), (*canonical).to_string());
                }
            }
        }

        Self {
            cities,
            cuisines: lower(cuisines),
            moods: lower(moods),
            city_aliases,
        }
    }

    /// Loads the catalog from the distinct values in the restaurants table.
    pub async fn load(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let cities: Vec<String> = sqlx::query_scalar("SELECT DISTINCT city FROM restaurants")
            .fetch_all(pool)
            .await?;
        let cuisines: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT cuisine FROM restaurants")
                .fetch_all(pool)
                .await?;
        let moods: Vec<String> = sqlx::query_scalar("SELECT DISTINCT mood FROM restaurants")
            .fetch_all(pool)
            .await?;

        info!(
            "Loaded catalog: {} cities, {} cuisines, {} moods",
            cities.len(),
            cuisines.len(),
            moods.len()
        );

        Ok(Self::from_values(&cities, &cuisines, &moods))
    }

    /// Normalizes a city name onto a catalog value: alias lookup first, then
    /// partial match, falling back to the input lowercased.
    pub fn normalize_city(&self, city: &str) -> String {
        let city_lower = city.to_lowercase();

        if let Some(mapped) = self.city_aliases.get(&city_lower) {
            return mapped.clone();
        }

        for (alias, mapped) in &self.city_aliases {
            if alias.contains(&city_lower) || city_lower.contains(alias.as_str()) {
                return mapped.clone();
            }
        }

        city_lower
    }

    /// Normalizes a cuisine: exact catalog match first, then partial match,
    /// falling back to the input lowercased.
    pub fn normalize_cuisine(&self, cuisine: &str) -> String {
        let cuisine_lower = cuisine.to_lowercase();

        if self.cuisines.contains(&cuisine_lower) {
            return cuisine_lower;
        }

        for known in &self.cuisines {
            if cuisine_lower.contains(known.as_str()) || known.contains(&cuisine_lower) {
                return known.clone();
            }
        }

        cuisine_lower
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }

    pub fn cuisines(&self) -> impl Iterator<Item = &str> {
        self.cuisines.iter().map(String::as_str)
    }

    pub fn moods(&self) -> impl Iterator<Item = &str> {
        self.moods.iter().map(String::as_str)
    }
}
