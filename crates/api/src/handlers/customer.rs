//! Handlers for customers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movierent_core::error::CoreError;
use movierent_core::types::DbId;
use movierent_db::models::customer::CustomerCreate;
use movierent_db::repositories::{CustomerRepo, RentalRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Pagination, PathParam, ValidatedJson};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /customer_add/
///
/// Create a customer and return it with its assigned id.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CustomerCreate>,
) -> AppResult<impl IntoResponse> {
    let customer = CustomerRepo::create(&state.pool, &input).await?;
    tracing::info!(customerid = customer.customerid, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /customers/?skip=0&limit=10
pub async fn list(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> AppResult<impl IntoResponse> {
    let customers = CustomerRepo::list(&state.pool, page).await?;
    Ok(Json(customers))
}

/// GET /customers/{customerid}/rentals/?skip=0&limit=10
///
/// List the rentals that reference a customer. 404 if the customer does
/// not exist.
pub async fn list_rentals(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    Pagination(page): Pagination,
) -> AppResult<impl IntoResponse> {
    CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    let rentals = RentalRepo::list_by_customer(&state.pool, id, page).await?;
    Ok(Json(rentals))
}
