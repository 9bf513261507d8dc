//! Domain logic for the marketing campaign manager.
//!
//! Nothing in this crate touches the database; callers pass rows in and get
//! plain values back.

pub mod dashboard;
pub mod error;
pub mod metric_names;
pub mod metrics;
pub mod types;
pub mod validation;
