//! Handlers for rentals.
//!
//! Rentals reference a customer and a movie. Neither reference nor the
//! status is pre-checked here; PostgreSQL rejects bad values and the
//! violation surfaces as a 409 `INTEGRITY_ERROR`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movierent_core::error::CoreError;
use movierent_core::types::DbId;
use movierent_db::models::rental::RentalCreate;
use movierent_db::repositories::{PaymentRepo, RentalRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Pagination, PathParam, ValidatedJson};
use crate::state::AppState;

/// POST /rental_add/
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RentalCreate>,
) -> AppResult<impl IntoResponse> {
    let rental = RentalRepo::create(&state.pool, &input).await?;
    tracing::info!(
        rentalid = rental.rentalid,
        customerid = rental.customerid,
        movieid = rental.movieid,
        status = %rental.status,
        "Rental created"
    );
    Ok((StatusCode::CREATED, Json(rental)))
}

/// GET /rentals/?skip=0&limit=10
pub async fn list(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> AppResult<impl IntoResponse> {
    let rentals = RentalRepo::list(&state.pool, page).await?;
    Ok(Json(rentals))
}

/// GET /rentals/{rentalid}/payments/?skip=0&limit=10
pub async fn list_payments(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    Pagination(page): Pagination,
) -> AppResult<impl IntoResponse> {
    RentalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Rental",
            id,
        }))?;
    let payments = PaymentRepo::list_by_rental(&state.pool, id, page).await?;
    Ok(Json(payments))
}
