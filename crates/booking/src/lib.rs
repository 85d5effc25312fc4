//! Relational data layer for the restaurant booking demo.
//!
//! Everything here is plumbing over two Postgres tables: `restaurants`
//! (populated by the `seed-data` crate) and `reservations` (written as
//! bookings are made). Consumers — typically an LLM-driven booking agent —
//! search and book through [`Database`]; input normalization against the
//! seeded data lives in [`Catalog`].

pub mod database;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod query_builder;
pub mod schema;

pub use database::Database;
pub use errors::AppError;
pub use models::{BookingConfirmation, BookingRequest, Reservation, Restaurant, RestaurantFilter};
pub use normalize::Catalog;
