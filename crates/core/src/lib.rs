pub mod error;
pub mod money;
pub mod pagination;
pub mod rental;
pub mod types;
