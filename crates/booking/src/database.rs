//! Database operations for restaurant search and reservations.
//!
//! Statements execute individually against the pool (no surrounding
//! transaction); a booking that fails after checks can in principle race a
//! concurrent booking for the last seats — acceptable for demo data.

use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::{
    BookingConfirmation, BookingRequest, Reservation, ReservationDetails, Restaurant,
    RestaurantFilter,
};
use crate::query_builder::WhereBuilder;
use crate::schema;

const RESTAURANT_COLUMNS: &str = "id, name, city, address, cuisine, seating_capacity, \
                                  available_capacity, available_reservations, mood";

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the demo tables if they don't exist. Safe to call repeatedly.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        schema::ensure_schema(&self.pool).await?;
        Ok(())
    }

    /// Searches restaurants with optional city/cuisine/mood filters plus a
    /// minimum free capacity, all case-insensitive. An empty filter returns
    /// every restaurant.
    pub async fn search_restaurants(
        &self,
        filter: &RestaurantFilter,
    ) -> Result<Vec<Restaurant>, AppError> {
        let mut wb = WhereBuilder::new();
        if filter.city.is_some() {
            wb.add_text_eq("city");
        }
        if filter.cuisine.is_some() {
            wb.add_text_eq("cuisine");
        }
        if filter.mood.is_some() {
            wb.add_text_eq("mood");
        }
        if filter.min_capacity.is_some() {
            wb.add_at_least("available_capacity");
        }

        let sql = format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants {} ORDER BY id",
            wb.build_where_clause()
        );

        // Bind order must match the condition order above.
        let mut query = sqlx::query_as::<_, Restaurant>(&sql);
        if let Some(city) = &filter.city {
            query = query.bind(city);
        }
        if let Some(cuisine) = &filter.cuisine {
            query = query.bind(cuisine);
        }
        if let Some(mood) = &filter.mood {
            query = query.bind(mood);
        }
        if let Some(min_capacity) = filter.min_capacity {
            query = query.bind(min_capacity);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Finds the first restaurant whose name contains `name`
    /// (case-insensitive), optionally restricted to a city.
    pub async fn find_restaurant(
        &self,
        name: &str,
        city: Option<&str>,
    ) -> Result<Option<Restaurant>, AppError> {
        let mut wb = WhereBuilder::new();
        wb.add_text_like("name");
        if city.is_some() {
            wb.add_text_eq("city");
        }

        let sql = format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants {} ORDER BY id LIMIT 1",
            wb.build_where_clause()
        );

        let mut query = sqlx::query_as::<_, Restaurant>(&sql).bind(format!("%{name}%"));
        if let Some(city) = city {
            query = query.bind(city);
        }

        Ok(query.fetch_optional(&self.pool).await?)
    }

    /// Fetches a restaurant by primary key.
    pub async fn get_restaurant(&self, id: i32) -> Result<Option<Restaurant>, AppError> {
        let sql = format!("SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE id = $1");
        let restaurant = sqlx::query_as::<_, Restaurant>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(restaurant)
    }

    /// Books a table: verifies the slot is open and the party fits, inserts
    /// the reservation, then removes the slot and decrements free capacity.
    pub async fn book_table(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let restaurant = self
            .find_restaurant(&request.restaurant_name, request.city.as_deref())
            .await?
            .ok_or(AppError::NotFound)?;

        if !restaurant
            .available_reservations
            .contains(&request.reservation_time)
        {
            return Err(AppError::UnavailableTime {
                available: restaurant.available_reservations,
            });
        }

        if request.party_size > restaurant.available_capacity {
            return Err(AppError::InsufficientCapacity {
                available: restaurant.available_capacity,
                requested: request.party_size,
            });
        }

        let confirmation_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO reservations (restaurant_id, customer_name, contact_number, party_size, reservation_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(restaurant.id)
        .bind(&request.customer_name)
        .bind(&request.contact_number)
        .bind(request.party_size)
        .bind(&request.reservation_time)
        .fetch_one(&self.pool)
        .await?;

        // Booked slots always come off the list, even if capacity remains.
        let remaining_slots: Vec<String> = restaurant
            .available_reservations
            .iter()
            .filter(|slot| **slot != request.reservation_time)
            .cloned()
            .collect();
        let remaining_capacity = restaurant.available_capacity - request.party_size;

        sqlx::query(
            r#"
            UPDATE restaurants
            SET available_capacity = $1, available_reservations = $2
            WHERE id = $3
            "#,
        )
        .bind(remaining_capacity)
        .bind(&remaining_slots)
        .bind(restaurant.id)
        .execute(&self.pool)
        .await?;

        info!(
            "Booked table for {} at {} ({}), confirmation {}",
            request.party_size, restaurant.name, request.reservation_time, confirmation_id
        );

        Ok(BookingConfirmation {
            confirmation_id,
            restaurant_id: restaurant.id,
            restaurant_name: restaurant.name,
            address: restaurant.address,
            city: restaurant.city,
            reservation_time: request.reservation_time.clone(),
            party_size: request.party_size,
        })
    }

    /// Looks up a reservation by confirmation number, joined with its
    /// restaurant.
    pub async fn get_reservation(&self, id: i32) -> Result<ReservationDetails, AppError> {
        let details = sqlx::query_as::<_, ReservationDetails>(
            r#"
            SELECT r.id, r.customer_name, r.contact_number, r.party_size, r.reservation_time,
                   r.created_at, res.name AS restaurant_name, res.address, res.city
            FROM reservations r
            JOIN restaurants res ON r.restaurant_id = res.id
            WHERE r.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        details.ok_or(AppError::ReservationNotFound)
    }

    /// Lists reservations for a restaurant, oldest first.
    pub async fn restaurant_reservations(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<Reservation>, AppError> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT id, restaurant_id, customer_name, contact_number, party_size,
                   reservation_time, reservation_date, created_at
            FROM reservations
            WHERE restaurant_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
