//! Rental entity model and DTOs.

use movierent_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `rentals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub rentalid: DbId,
    pub customerid: DbId,
    pub movieid: DbId,
    pub rental_date: Date,
    pub due_date: Date,
    /// Nullable in storage; always populated by the create endpoint today.
    pub return_date: Option<Date>,
    pub status: String,
}

/// DTO for creating a new rental.
///
/// `status` is not checked here. The `status_check` constraint rejects
/// anything outside `movierent_core::rental::RENTAL_STATUSES`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RentalCreate {
    pub customerid: DbId,
    pub movieid: DbId,
    pub rental_date: Date,
    pub due_date: Date,
    pub return_date: Date,
    pub status: String,
}
