use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, PrimitiveDateTime};

/// A seeded restaurant row.
///
/// `available_reservations` is a denormalized `TEXT[]` column holding open
/// time slots in display form ("7:00 PM"); slots are removed as they are
/// booked.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub address: String,
    pub cuisine: String,
    pub seating_capacity: i32,
    pub available_capacity: i32,
    pub available_reservations: Vec<String>,
    pub mood: String,
}

/// Optional filters for restaurant search. Empty filter matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantFilter {
    pub city: Option<String>,
    pub cuisine: Option<String>,
    pub mood: Option<String>,
    /// Minimum `available_capacity`, typically the party size.
    pub min_capacity: Option<i32>,
}

/// A booking request as collected from the customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub restaurant_name: String,
    pub city: Option<String>,
    pub reservation_time: String,
    pub party_size: i32,
    pub customer_name: String,
    pub contact_number: String,
}

impl BookingRequest {
    /// Rejects requests with blank required fields or a non-positive party
    /// size before any database work happens.
    pub fn validate(&self) -> Result<(), String> {
        let mut missing = Vec::new();
        if self.restaurant_name.trim().is_empty() {
            missing.push("restaurant name");
        }
        if self.reservation_time.trim().is_empty() {
            missing.push("reservation time");
        }
        if self.customer_name.trim().is_empty() {
            missing.push("customer name");
        }
        if self.contact_number.trim().is_empty() {
            missing.push("contact number");
        }
        if !missing.is_empty() {
            return Err(format!("missing required fields: {}", missing.join(", ")));
        }
        if self.party_size < 1 {
            return Err(format!("invalid party size: {}", self.party_size));
        }
        Ok(())
    }
}

/// A stored reservation row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: i32,
    pub restaurant_id: i32,
    pub customer_name: String,
    pub contact_number: String,
    pub party_size: i32,
    pub reservation_time: String,
    pub reservation_date: Date,
    pub created_at: PrimitiveDateTime,
}

/// Reservation joined with its restaurant, as returned to the customer when
/// checking a confirmation number.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReservationDetails {
    pub id: i32,
    pub customer_name: String,
    pub contact_number: String,
    pub party_size: i32,
    pub reservation_time: String,
    pub created_at: PrimitiveDateTime,
    pub restaurant_name: String,
    pub address: String,
    pub city: String,
}

/// Returned by a successful booking.
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub confirmation_id: i32,
    pub restaurant_id: i32,
    pub restaurant_name: String,
    pub address: String,
    pub city: String,
    pub reservation_time: String,
    pub party_size: i32,
}
