//! Payment entity model and DTOs.

use movierent_core::types::{Date, DbId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `payments` table.
///
/// `amount` serializes as a decimal string (e.g. `"12.50"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub paymentid: DbId,
    pub rentalid: DbId,
    pub amount: Decimal,
    pub payment_date: Date,
}

/// DTO for recording a payment against a rental.
///
/// `amount` is accepted as a JSON string or number and must fit
/// `NUMERIC(10,2)` exactly.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaymentCreate {
    pub rentalid: DbId,
    #[validate(custom(function = "movierent_core::money::validate_amount"))]
    pub amount: Decimal,
    pub payment_date: Date,
}
