//! Movie entity model and DTOs.

use movierent_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub movieid: DbId,
    pub title: String,
    pub category: String,
    pub availability: bool,
}

/// DTO for creating a new movie.
///
/// `availability` is required here even though the column defaults to `true`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MovieCreate {
    pub title: String,
    pub category: String,
    pub availability: bool,
}
