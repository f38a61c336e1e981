//! Repository for the `movies` table.

use movierent_core::pagination::Page;
use movierent_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{Movie, MovieCreate};

const COLUMNS: &str = "movieid, title, category, availability";

/// Provides create/list operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &MovieCreate) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, category, availability) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.availability)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE movieid = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of movies in storage order.
    pub async fn list(pool: &PgPool, page: Page) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Movie>(&query)
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(pool)
            .await
    }
}
