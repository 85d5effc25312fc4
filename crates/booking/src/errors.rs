use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Restaurant not found")]
    NotFound,

    #[error("Reservation not found")]
    ReservationNotFound,

    #[error("Requested time is not available")]
    UnavailableTime {
        /// Slots still open at the restaurant, for suggesting alternatives.
        available: Vec<String>,
    },

    #[error("Not enough seats available: {available} left, {requested} requested")]
    InsufficientCapacity { available: i32, requested: i32 },
}
