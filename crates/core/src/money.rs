//! Fixed-point amount rules for `payments.amount` (`NUMERIC(10,2)`).
//!
//! Amounts are never rounded on the way in: a value with more fractional
//! digits than the column holds, or too many integer digits, is rejected.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::ValidationError;

/// Total significant digits of the `amount` column.
pub const AMOUNT_PRECISION: u32 = 10;

/// Fractional digits of the `amount` column.
pub const AMOUNT_SCALE: u32 = 2;

/// Exclusive upper bound on `|amount|` (10^(precision - scale)).
pub fn amount_limit() -> Decimal {
    Decimal::from(10_i64.pow(AMOUNT_PRECISION - AMOUNT_SCALE))
}

/// Check that `amount` fits `NUMERIC(10,2)` without rounding.
///
/// Trailing zeros do not count against the scale, so `12.500` is accepted
/// and stored as `12.50`.
pub fn check_amount(amount: &Decimal) -> Result<(), &'static str> {
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err("amount must have at most 2 decimal places");
    }
    if amount.abs() >= amount_limit() {
        return Err("amount must be less than 100000000 in magnitude");
    }
    Ok(())
}

/// `validator` adapter for [`check_amount`].
pub fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    check_amount(amount).map_err(|msg| {
        let mut err = ValidationError::new("amount_precision");
        err.message = Some(Cow::Borrowed(msg));
        err
    })
}
