//! Database integration for seeding.
//!
//! The [`Seeder`] replaces the contents of the `restaurants` table with the
//! static seed dataset, restarting ids at 1.

mod seeder;

pub use seeder::{SeedError, Seeder};
