//! Repository for the `customers` table.

use movierent_core::pagination::Page;
use movierent_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{Customer, CustomerCreate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "customerid, name, email, phone, loyalty_points";

/// Provides create/list operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CustomerCreate) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (name, email, phone, loyalty_points) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.loyalty_points)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE customerid = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of customers in storage order.
    pub async fn list(pool: &PgPool, page: Page) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Customer>(&query)
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(pool)
            .await
    }
}
