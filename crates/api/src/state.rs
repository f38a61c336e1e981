/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and injected into the router; there is no global
/// pool. Cloning is cheap because `PgPool` is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers check out one connection per query.
    pub pool: movierent_db::DbPool,
}
