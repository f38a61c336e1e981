//! Handlers for payments.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movierent_db::models::payment::PaymentCreate;
use movierent_db::repositories::PaymentRepo;

use crate::error::AppResult;
use crate::extract::{Pagination, ValidatedJson};
use crate::state::AppState;

/// POST /payment_add/
///
/// Amounts with more than two decimal places are rejected with 422 rather
/// than rounded.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<PaymentCreate>,
) -> AppResult<impl IntoResponse> {
    let payment = PaymentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        paymentid = payment.paymentid,
        rentalid = payment.rentalid,
        amount = %payment.amount,
        "Payment recorded"
    );
    Ok((StatusCode::CREATED, Json(payment)))
}

/// GET /payments/?skip=0&limit=10
pub async fn list(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> AppResult<impl IntoResponse> {
    let payments = PaymentRepo::list(&state.pool, page).await?;
    Ok(Json(payments))
}
