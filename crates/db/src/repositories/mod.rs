//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Values are always bound as
//! parameters; writes go through an explicit transaction.

pub mod campaign_repo;
pub mod channel_repo;
pub mod customer_repo;
pub mod performance_repo;

pub use campaign_repo::CampaignRepo;
pub use channel_repo::ChannelRepo;
pub use customer_repo::CustomerRepo;
pub use performance_repo::PerformanceRepo;
