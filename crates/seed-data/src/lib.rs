//! Seed data for the restaurant booking demo.
//!
//! This crate resets the `restaurants` table to a known-good baseline: a
//! static JSON dataset plus a small inline list, inserted in order with ids
//! restarting at 1. Every run is a full replace — there is no incremental or
//! upsert mode, so re-running at any time returns the demo to a clean state.
//!
//! Run with:
//! ```text
//! DATABASE_URL=postgres://... cargo run -p seed-data --bin seed
//! ```

pub mod db;
pub mod records;

pub use db::{SeedError, Seeder};
pub use records::{SeedRestaurant, default_seed_file, inline_records, load_seed_data};
