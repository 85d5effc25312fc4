//! Full-replace seeding of the restaurants table.

use std::path::{Path, PathBuf};

use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::records::{SeedRestaurant, inline_records, load_seed_data};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Schema creation failed: {0}")]
    Schema(sqlx::Error),

    #[error("Truncate failed: {0}")]
    Truncate(sqlx::Error),

    #[error("Insert failed for restaurant {index} ({name}): {source}")]
    Insert {
        index: usize,
        name: String,
        source: sqlx::Error,
    },
}

/// Seeder for resetting the restaurants table to the static dataset.
///
/// The run is a strict linear pipeline: ensure schema, truncate (restarting
/// the identity sequence), insert file records, insert inline records. Each
/// statement auto-commits and the first failure aborts the rest, so a failed
/// run can leave a prefix of records behind; re-running replaces everything.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder over the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the demo tables if they don't exist. A no-op when already
    /// present; an existing incompatible table is not altered.
    pub async fn ensure_schema(&self) -> Result<(), SeedError> {
        booking::schema::ensure_schema(&self.pool)
            .await
            .map_err(SeedError::Schema)
    }

    /// Empties the restaurants table and restarts its identity sequence so
    /// the next insert gets id 1. CASCADE also clears reservations, which
    /// hold a foreign key into restaurants and are meaningless once their
    /// restaurants are gone.
    pub async fn reset_table(&self) -> Result<(), SeedError> {
        sqlx::query("TRUNCATE restaurants RESTART IDENTITY CASCADE")
            .execute(&self.pool)
            .await
            .map_err(SeedError::Truncate)?;

        info!("Cleared restaurants table");
        Ok(())
    }

    /// Inserts records one at a time, in list order. Aborts at the first
    /// failure, naming the failing record. `offset` is the count of records
    /// already inserted this run, used only for log/error numbering.
    pub async fn insert_records(
        &self,
        records: &[SeedRestaurant],
        offset: usize,
    ) -> Result<(), SeedError> {
        for (i, record) in records.iter().enumerate() {
            let index = offset + i + 1;

            sqlx::query(
                r#"
                INSERT INTO restaurants (name, city, address, cuisine, seating_capacity,
                                         available_capacity, available_reservations, mood)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(&record.name)
            .bind(&record.city)
            .bind(&record.address)
            .bind(&record.cuisine)
            .bind(record.seating_capacity)
            .bind(record.available_capacity)
            .bind(&record.available_reservations)
            .bind(&record.mood)
            .execute(&self.pool)
            .await
            .map_err(|source| SeedError::Insert {
                index,
                name: record.name.clone(),
                source,
            })?;

            info!("Inserted restaurant {}: {}", index, record.name);
        }

        Ok(())
    }

    /// Runs the full reseed: schema, truncate, file records, inline records.
    /// Returns the total number of restaurants inserted.
    pub async fn run(&self, seed_file: &Path) -> Result<usize, SeedError> {
        // Read the file up front so a bad dataset fails before any table is
        // touched.
        let file_records = load_seed_data(seed_file)?;
        let inline = inline_records();
        info!(
            "Loaded {} restaurants from {} plus {} inline",
            file_records.len(),
            seed_file.display(),
            inline.len()
        );

        self.ensure_schema().await?;
        self.reset_table().await?;
        self.insert_records(&file_records, 0).await?;
        self.insert_records(&inline, file_records.len()).await?;

        Ok(file_records.len() + inline.len())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
