pub mod customer;
pub mod movie;
pub mod payment;
pub mod rental;
