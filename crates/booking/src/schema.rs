//! Idempotent schema creation for the demo tables.
//!
//! There is deliberately no migration framework here: the statements are
//! `CREATE TABLE IF NOT EXISTS`, a no-op when the table already exists, and
//! nothing alters a pre-existing incompatible table.

use sqlx::PgPool;
use tracing::info;

/// Restaurants are seeded in bulk; reservation slots live in a `TEXT[]`
/// column because they are always read as a unit, never queried per-slot.
pub const CREATE_RESTAURANTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS restaurants (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    city VARCHAR(100) NOT NULL,
    address VARCHAR(255) NOT NULL,
    cuisine VARCHAR(100) NOT NULL,
    seating_capacity INTEGER NOT NULL,
    available_capacity INTEGER NOT NULL,
    available_reservations TEXT[] NOT NULL,
    mood VARCHAR(100) NOT NULL
)
"#;

pub const CREATE_RESERVATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS reservations (
    id SERIAL PRIMARY KEY,
    restaurant_id INTEGER REFERENCES restaurants(id),
    customer_name VARCHAR(255) NOT NULL,
    contact_number VARCHAR(20) NOT NULL,
    party_size INTEGER NOT NULL,
    reservation_time VARCHAR(20) NOT NULL,
    reservation_date DATE DEFAULT CURRENT_DATE,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Creates both tables if they don't exist. Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_RESTAURANTS_TABLE).execute(pool).await?;
    info!("Ensured restaurants table exists");

    sqlx::query(CREATE_RESERVATIONS_TABLE).execute(pool).await?;
    info!("Ensured reservations table exists");

    Ok(())
}
