pub mod campaign;
pub mod channel;
pub mod customer;
pub mod dashboard;
