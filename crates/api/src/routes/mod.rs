pub mod customer;
pub mod health;
pub mod movie;
pub mod payment;
pub mod rental;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /customer_add/                        create customer (POST)
/// /customers/                           list customers (GET)
/// /customers/{customerid}/rentals/      rentals of a customer (GET)
///
/// /movie_add/                           create movie (POST)
/// /movies/                              list movies (GET)
/// /movies/{movieid}/rentals/            rentals of a movie (GET)
///
/// /rental_add/                          create rental (POST)
/// /rentals/                             list rentals (GET)
/// /rentals/{rentalid}/payments/         payments of a rental (GET)
///
/// /payment_add/                         create payment (POST)
/// /payments/                            list payments (GET)
/// ```
///
/// List endpoints accept `?skip=&limit=` (defaults 0 and 10).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(customer::router())
        .merge(movie::router())
        .merge(rental::router())
        .merge(payment::router())
}
