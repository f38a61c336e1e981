//! Rental status vocabulary.
//!
//! The `rentals.status` column carries a `status_check` constraint that
//! only admits these values. The application does not pre-check them; an
//! unknown status is rejected by the database as an integrity violation.

/// A movie that has been handed out and not yet brought back.
pub const STATUS_RENTED: &str = "rented";

/// A movie that has been brought back.
pub const STATUS_RETURNED: &str = "returned";

/// Every status value the `status_check` constraint accepts.
pub const RENTAL_STATUSES: &[&str] = &[STATUS_RENTED, STATUS_RETURNED];

