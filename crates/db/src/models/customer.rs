//! Customer entity model and DTOs.

use movierent_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub customerid: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub loyalty_points: i32,
}

/// DTO for creating a new customer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub loyalty_points: i32,
}
