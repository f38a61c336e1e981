//! Repository for the `payments` table.

use movierent_core::pagination::Page;
use movierent_core::types::DbId;
use sqlx::PgPool;

use crate::models::payment::{Payment, PaymentCreate};

const COLUMNS: &str = "paymentid, rentalid, amount, payment_date";

/// Provides create/list operations for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a new payment, returning the created row.
    ///
    /// The amount is bound as-is; callers validate its scale beforehand so
    /// PostgreSQL never has to round it.
    pub async fn create(pool: &PgPool, input: &PaymentCreate) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (rentalid, amount, payment_date) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.rentalid)
            .bind(input.amount)
            .bind(input.payment_date)
            .fetch_one(pool)
            .await
    }

    /// List one page of payments in storage order.
    pub async fn list(pool: &PgPool, page: Page) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Payment>(&query)
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(pool)
            .await
    }

    /// List one page of the payments recorded against a rental.
    pub async fn list_by_rental(
        pool: &PgPool,
        rental_id: DbId,
        page: Page,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM payments WHERE rentalid = $1 OFFSET $2 LIMIT $3");
        sqlx::query_as::<_, Payment>(&query)
            .bind(rental_id)
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(pool)
            .await
    }
}
