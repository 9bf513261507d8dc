//! Domain model structs and command DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` command DTOs for the writes it supports

pub mod campaign;
pub mod channel;
pub mod customer;
pub mod performance;
