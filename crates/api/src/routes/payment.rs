//! Route definitions for payments.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payment_add/", post(payment::create))
        .route("/payments/", get(payment::list))
}
