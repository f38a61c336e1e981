//! Repository for the `rentals` table.
//!
//! Foreign keys to `customers` and `movies` and the `status_check`
//! constraint are enforced by PostgreSQL; violations come back as
//! `sqlx::Error::Database` and no row is written.

use movierent_core::pagination::Page;
use movierent_core::types::DbId;
use sqlx::PgPool;

use crate::models::rental::{Rental, RentalCreate};

const COLUMNS: &str =
    "rentalid, customerid, movieid, rental_date, due_date, return_date, status";

/// Provides create/list operations for rentals.
pub struct RentalRepo;

impl RentalRepo {
    /// Insert a new rental, returning the created row.
    pub async fn create(pool: &PgPool, input: &RentalCreate) -> Result<Rental, sqlx::Error> {
        let query = format!(
            "INSERT INTO rentals \
                (customerid, movieid, rental_date, due_date, return_date, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(input.customerid)
            .bind(input.movieid)
            .bind(input.rental_date)
            .bind(input.due_date)
            .bind(input.return_date)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals WHERE rentalid = $1");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of rentals in storage order.
    pub async fn list(pool: &PgPool, page: Page) -> Result<Vec<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Rental>(&query)
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(pool)
            .await
    }

    /// List one page of a customer's rentals.
    pub async fn list_by_customer(
        pool: &PgPool,
        customer_id: DbId,
        page: Page,
    ) -> Result<Vec<Rental>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rentals WHERE customerid = $1 OFFSET $2 LIMIT $3"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(customer_id)
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(pool)
            .await
    }

    /// List one page of a movie's rentals.
    pub async fn list_by_movie(
        pool: &PgPool,
        movie_id: DbId,
        page: Page,
    ) -> Result<Vec<Rental>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM rentals WHERE movieid = $1 OFFSET $2 LIMIT $3");
        sqlx::query_as::<_, Rental>(&query)
            .bind(movie_id)
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(pool)
            .await
    }
}
