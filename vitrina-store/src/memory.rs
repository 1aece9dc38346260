use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;
use uuid::Uuid;
use vitrina_analytics::Event;
use vitrina_catalog::{Product, Tenant};
use vitrina_core::repository::{CampaignStore, CatalogStore, EventStore, StoreResult};
use vitrina_offer::{Campaign, CampaignBinding, CampaignItem};
use vitrina_shared::TenantId;

/// Process-local implementation of every store trait, for tests and local runs.
#[derive(Default)]
pub struct InMemoryStore {
    tenants: RwLock<Vec<Tenant>>,
    products: RwLock<Vec<Product>>,
    campaigns: RwLock<Vec<Campaign>>,
    items: RwLock<Vec<CampaignItem>>,
    /// Oldest first; reads reverse it.
    events: RwLock<Vec<Event>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_tenant(&self, tenant: Tenant) {
        self.tenants.write().await.push(tenant);
    }

    pub async fn add_product(&self, product: Product) {
        self.products.write().await.push(product);
    }

    pub async fn delete_product(&self, product_id: Uuid) {
        self.products.write().await.retain(|p| p.id != product_id);
        // Items go with their product.
        self.items.write().await.retain(|i| i.product_id != product_id);
    }

    /// Campaign items are created together with their campaign and never edited afterwards.
    pub async fn add_campaign(&self, campaign: Campaign, items: Vec<CampaignItem>) {
        let campaign_id = campaign.id;
        self.campaigns.write().await.push(campaign);
        self.items
            .write()
            .await
            .extend(items.into_iter().map(|item| CampaignItem { campaign_id, ..item }));
    }

    pub async fn set_campaign_active(&self, campaign_id: Uuid, active: bool) {
        for campaign in self.campaigns.write().await.iter_mut() {
            if campaign.id == campaign_id {
                campaign.is_active = active;
            }
        }
    }

    pub async fn delete_campaign(&self, campaign_id: Uuid) {
        self.campaigns.write().await.retain(|c| c.id != campaign_id);
        self.items.write().await.retain(|i| i.campaign_id != campaign_id);
    }

    pub async fn event_count(&self) -> usize {
        self.events.read().await.len()
    }
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    async fn find_tenant(&self, slug: &str) -> StoreResult<Option<Tenant>> {
        Ok(self.tenants.read().await.iter().find(|t| t.slug == slug).cloned())
    }

    async fn list_active_products(&self, tenant: TenantId) -> StoreResult<Vec<Product>> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .filter(|p| p.tenant_id == tenant && p.is_active)
            .cloned()
            .collect())
    }

    async fn list_products(&self, tenant: TenantId) -> StoreResult<Vec<Product>> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .filter(|p| p.tenant_id == tenant)
            .cloned()
            .collect())
    }

    async fn find_product(&self, tenant: TenantId, slug: &str) -> StoreResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.tenant_id == tenant && p.is_active && p.slug == slug)
            .cloned())
    }
}

#[async_trait]
impl CampaignStore for InMemoryStore {
    async fn list_active_campaign_items(&self, tenant: TenantId) -> StoreResult<Vec<CampaignBinding>> {
        let owned: HashSet<Uuid> = self
            .products
            .read()
            .await
            .iter()
            .filter(|p| p.tenant_id == tenant)
            .map(|p| p.id)
            .collect();
        let campaigns = self.campaigns.read().await;

        Ok(self
            .items
            .read()
            .await
            .iter()
            .filter(|item| owned.contains(&item.product_id))
            .filter_map(|item| {
                campaigns
                    .iter()
                    .find(|c| c.id == item.campaign_id && c.is_active)
                    .map(|c| (item.clone(), c.clone()))
            })
            .collect())
    }
}

#[async_trait]
impl EventStore for InMemoryStore {
    async fn list_recent(&self, limit: usize) -> StoreResult<Vec<Event>> {
        Ok(self.events.read().await.iter().rev().take(limit).cloned().collect())
    }

    async fn append(&self, event: &Event) -> StoreResult<()> {
        self.events.write().await.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vitrina_shared::models::events::EventType;

    fn tenant(n: u128) -> TenantId {
        TenantId::new(Uuid::from_u128(n))
    }

    fn product(id: u128, owner: TenantId, active: bool) -> Product {
        Product {
            id: Uuid::from_u128(id),
            tenant_id: owner,
            name: format!("p{}", id),
            slug: format!("p{}", id),
            description: None,
            base_price: Some(10.0),
            category: None,
            is_active: active,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn campaign(id: u128) -> Campaign {
        Campaign {
            id: Uuid::from_u128(id),
            title: "Promo".into(),
            banner_url: None,
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_products_are_tenant_scoped() {
        let store = InMemoryStore::new();
        store.add_product(product(1, tenant(1), true)).await;
        store.add_product(product(2, tenant(1), false)).await;
        store.add_product(product(3, tenant(2), true)).await;

        assert_eq!(store.list_active_products(tenant(1)).await.unwrap().len(), 1);
        assert_eq!(store.list_products(tenant(1)).await.unwrap().len(), 2);

        assert!(store.find_product(tenant(1), "p1").await.unwrap().is_some());
        // Inactive, or owned by another tenant.
        assert!(store.find_product(tenant(1), "p2").await.unwrap().is_none());
        assert!(store.find_product(tenant(1), "p3").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_campaign_items_follow_tenant_and_active_flag() {
        let store = InMemoryStore::new();
        store.add_product(product(1, tenant(1), true)).await;
        store.add_product(product(2, tenant(2), true)).await;
        let items = vec![
            CampaignItem { campaign_id: Uuid::nil(), product_id: Uuid::from_u128(1), offer_price: 5.0 },
            CampaignItem { campaign_id: Uuid::nil(), product_id: Uuid::from_u128(2), offer_price: 5.0 },
        ];
        store.add_campaign(campaign(9), items).await;

        let bindings = store.list_active_campaign_items(tenant(1)).await.unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].0.campaign_id, Uuid::from_u128(9));

        store.set_campaign_active(Uuid::from_u128(9), false).await;
        assert!(store.list_active_campaign_items(tenant(1)).await.unwrap().is_empty());

        store.delete_campaign(Uuid::from_u128(9)).await;
        store.set_campaign_active(Uuid::from_u128(9), true).await;
        assert!(store.list_active_campaign_items(tenant(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recent_events_are_bounded_and_newest_first() {
        let store = InMemoryStore::new();
        for i in 0..5 {
            store.append(&Event::new(EventType::Search, "s".into(), None, Some(format!("q{}", i)))).await.unwrap();
        }

        let recent = store.list_recent(2).await.unwrap();
        let queries: Vec<_> = recent.iter().map(|e| e.query.clone().unwrap()).collect();
        assert_eq!(queries, vec!["q4", "q3"]);
        assert_eq!(store.event_count().await, 5);
    }
}
