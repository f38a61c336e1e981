//! Route definitions for customers.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::customer;
use crate::state::AppState;

/// ```text
/// POST /customer_add/                     -> create
/// GET  /customers/                        -> list
/// GET  /customers/{customerid}/rentals/   -> list_rentals
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customer_add/", post(customer::create))
        .route("/customers/", get(customer::list))
        .route("/customers/{customerid}/rentals/", get(customer::list_rentals))
}
