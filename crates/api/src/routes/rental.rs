//! Route definitions for rentals.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::rental;
use crate::state::AppState;

/// ```text
/// POST /rental_add/                     -> create
/// GET  /rentals/                        -> list
/// GET  /rentals/{rentalid}/payments/    -> list_payments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rental_add/", post(rental::create))
        .route("/rentals/", get(rental::list))
        .route("/rentals/{rentalid}/payments/", get(rental::list_payments))
}
