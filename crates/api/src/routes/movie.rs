//! Route definitions for movies.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// ```text
/// POST /movie_add/                     -> create
/// GET  /movies/                        -> list
/// GET  /movies/{movieid}/rentals/      -> list_rentals
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movie_add/", post(movie::create))
        .route("/movies/", get(movie::list))
        .route("/movies/{movieid}/rentals/", get(movie::list_rentals))
}
