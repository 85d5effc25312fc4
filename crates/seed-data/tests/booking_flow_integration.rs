//! Integration tests for the booking data layer against freshly seeded data.
//!
//! Requires DATABASE_URL pointing at a PostgreSQL database; tests skip when
//! it is not set. Each test reseeds, so state from earlier tests never leaks.

use std::env;

use booking::{AppError, BookingRequest, Catalog, Database, RestaurantFilter};
use seed_data::{Seeder, default_seed_file};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::sync::Mutex;

static DB_LOCK: Mutex<()> = Mutex::const_new(());

async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

async fn reseed(pool: &PgPool) {
    Seeder::new(pool.clone())
        .run(default_seed_file())
        .await
        .expect("Seed run failed");
}

fn booking_request(time: &str, party_size: i32) -> BookingRequest {
    BookingRequest {
        restaurant_name: "Via Carota".to_string(),
        city: Some("New York".to_string()),
        reservation_time: time.to_string(),
        party_size,
        customer_name: "Ada Diaz".to_string(),
        contact_number: "555-0142".to_string(),
    }
}

#[tokio::test]
async fn test_search_with_normalized_city() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let _guard = DB_LOCK.lock().await;
    reseed(&pool).await;

    let db = Database::new(pool.clone());
    let catalog = Catalog::load(&pool).await.expect("Catalog load failed");

    // "NYC" is not a stored city name; normalization maps it first.
    let filter = RestaurantFilter {
        city: Some(catalog.normalize_city("NYC")),
        cuisine: Some(catalog.normalize_cuisine("italian food")),
        ..Default::default()
    };
    let results = db.search_restaurants(&filter).await.expect("Search failed");

    assert!(!results.is_empty());
    for restaurant in &results {
        assert_eq!(restaurant.city, "New York");
        assert_eq!(restaurant.cuisine, "Italian");
    }
}

#[tokio::test]
async fn test_book_table_updates_capacity_and_slots() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let _guard = DB_LOCK.lock().await;
    reseed(&pool).await;

    let db = Database::new(pool.clone());
    let before = db
        .find_restaurant("Via Carota", None)
        .await
        .expect("Lookup failed")
        .expect("Seeded restaurant missing");

    let confirmation = db
        .book_table(&booking_request("6:00 PM", 4))
        .await
        .expect("Booking failed");
    assert_eq!(confirmation.restaurant_id, before.id);

    let after = db
        .get_restaurant(before.id)
        .await
        .expect("Lookup failed")
        .expect("Restaurant vanished");
    assert_eq!(after.available_capacity, before.available_capacity - 4);
    assert!(!after.available_reservations.contains(&"6:00 PM".to_string()));

    let details = db
        .get_reservation(confirmation.confirmation_id)
        .await
        .expect("Reservation lookup failed");
    assert_eq!(details.customer_name, "Ada Diaz");
    assert_eq!(details.restaurant_name, "Via Carota");
    assert_eq!(details.party_size, 4);

    let reservations = db
        .restaurant_reservations(before.id)
        .await
        .expect("Reservation list failed");
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id, confirmation.confirmation_id);
    assert_eq!(reservations[0].reservation_time, "6:00 PM");
}

#[tokio::test]
async fn test_book_table_rejects_unavailable_time() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let _guard = DB_LOCK.lock().await;
    reseed(&pool).await;

    let db = Database::new(pool.clone());
    let err = db
        .book_table(&booking_request("11:45 PM", 2))
        .await
        .expect_err("Unlisted slot should be rejected");

    match err {
        AppError::UnavailableTime { available } => {
            assert!(available.contains(&"6:00 PM".to_string()));
        }
        other => panic!("Expected UnavailableTime, got {other:?}"),
    }
}

#[tokio::test]
async fn test_book_table_rejects_oversized_party() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let _guard = DB_LOCK.lock().await;
    reseed(&pool).await;

    let db = Database::new(pool.clone());
    let err = db
        .book_table(&booking_request("6:00 PM", 500))
        .await
        .expect_err("Oversized party should be rejected");

    match err {
        AppError::InsufficientCapacity {
            available,
            requested,
        } => {
            assert_eq!(requested, 500);
            assert!(available < 500);
        }
        other => panic!("Expected InsufficientCapacity, got {other:?}"),
    }
}
