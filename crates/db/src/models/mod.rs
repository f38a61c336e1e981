//! Row structs and create DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts

pub mod customer;
pub mod movie;
pub mod payment;
pub mod rental;
