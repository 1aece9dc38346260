use async_trait::async_trait;
use vitrina_analytics::Event;
use vitrina_catalog::{Product, Tenant};
use vitrina_offer::CampaignBinding;
use vitrina_shared::TenantId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("write rejected: {0}")]
    Rejected(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to tenants and their products. Every product read is keyed by tenant.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn find_tenant(&self, slug: &str) -> StoreResult<Option<Tenant>>;

    /// Active products of `tenant`.
    async fn list_active_products(&self, tenant: TenantId) -> StoreResult<Vec<Product>>;

    /// All products of `tenant`, active or not.
    async fn list_products(&self, tenant: TenantId) -> StoreResult<Vec<Product>>;

    /// The active product of `tenant` with this slug.
    async fn find_product(&self, tenant: TenantId, slug: &str) -> StoreResult<Option<Product>>;
}

/// Read access to campaign items joined with their (active) campaigns.
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// Items of active campaigns that reference products of `tenant`.
    async fn list_active_campaign_items(&self, tenant: TenantId) -> StoreResult<Vec<CampaignBinding>>;
}

/// Append-only interaction log.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// At most `limit` events, most recent first.
    async fn list_recent(&self, limit: usize) -> StoreResult<Vec<Event>>;

    async fn append(&self, event: &Event) -> StoreResult<()>;
}
