//! Handlers for movies.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movierent_core::error::CoreError;
use movierent_core::types::DbId;
use movierent_db::models::movie::MovieCreate;
use movierent_db::repositories::{MovieRepo, RentalRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Pagination, PathParam, ValidatedJson};
use crate::state::AppState;

/// POST /movie_add/
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<MovieCreate>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movieid = movie.movieid, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies/?skip=0&limit=10
pub async fn list(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list(&state.pool, page).await?;
    Ok(Json(movies))
}

/// GET /movies/{movieid}/rentals/?skip=0&limit=10
pub async fn list_rentals(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    Pagination(page): Pagination,
) -> AppResult<impl IntoResponse> {
    MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    let rentals = RentalRepo::list_by_movie(&state.pool, id, page).await?;
    Ok(Json(rentals))
}
