//! Reseeds the restaurants table from the static dataset.
//!
//! Run with:
//! ```
//! DATABASE_URL=postgres://... cargo run -p seed-data --bin seed [seed-file]
//! ```
//!
//! Exits nonzero on failure; console output narrates each step either way.

use std::path::PathBuf;

use anyhow::Context;
use seed_data::{Seeder, default_seed_file};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // No fallback URL: a missing variable must fail before any schema or
    // data operation is attempted.
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set to the target database")?;

    let seed_file = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_seed_file().to_path_buf());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to database")?;

    tracing::info!("Connected to database");

    let seeder = Seeder::new(pool.clone());
    let result = seeder.run(&seed_file).await;

    // The pool is released whether or not the run succeeded.
    pool.close().await;

    match result {
        Ok(total) => {
            tracing::info!("Seed completed: {total} restaurants");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Seeding failed: {e}");
            Err(e.into())
        }
    }
}
