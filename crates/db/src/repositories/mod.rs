//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every method issues exactly one
//! statement, so it checks out one pooled connection and returns it when
//! the future completes or is dropped.

pub mod customer_repo;
pub mod movie_repo;
pub mod payment_repo;
pub mod rental_repo;

pub use customer_repo::CustomerRepo;
pub use movie_repo::MovieRepo;
pub use payment_repo::PaymentRepo;
pub use rental_repo::RentalRepo;
