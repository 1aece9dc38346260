pub mod app_config;
pub mod database;
pub mod catalog_repo;
pub mod campaign_repo;
pub mod event_repo;
pub mod redis_repo;
pub mod memory;

pub use database::DbClient;
pub use redis_repo::RedisClient;
pub use memory::InMemoryStore;
pub use catalog_repo::PgCatalogStore;
pub use campaign_repo::PgCampaignStore;
pub use event_repo::PgEventStore;
