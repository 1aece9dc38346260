use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use vitrina_core::repository::{CampaignStore, StoreResult};
use vitrina_offer::{Campaign, CampaignBinding, CampaignItem};
use vitrina_shared::TenantId;

use crate::database::unavailable;

pub struct PgCampaignStore {
    pool: PgPool,
}

impl PgCampaignStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BindingRow {
    campaign_id: Uuid,
    product_id: Uuid,
    offer_price: f64,
    title: String,
    banner_url: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<BindingRow> for CampaignBinding {
    fn from(row: BindingRow) -> Self {
        (
            CampaignItem {
                campaign_id: row.campaign_id,
                product_id: row.product_id,
                offer_price: row.offer_price,
            },
            Campaign {
                id: row.campaign_id,
                title: row.title,
                banner_url: row.banner_url,
                is_active: row.is_active,
                created_at: row.created_at,
            },
        )
    }
}

#[async_trait]
impl CampaignStore for PgCampaignStore {
    async fn list_active_campaign_items(&self, tenant: TenantId) -> StoreResult<Vec<CampaignBinding>> {
        // Campaigns are not tenant-owned; they reach a store only through its products.
        let rows = sqlx::query_as::<_, BindingRow>(
            r#"
            SELECT ci.campaign_id, ci.product_id, ci.offer_price,
                   c.title, c.banner_url, c.is_active, c.created_at
            FROM campaign_items ci
            JOIN campaigns c ON c.id = ci.campaign_id
            JOIN products p ON p.id = ci.product_id
            WHERE c.is_active = TRUE AND p.store_id = $1
            ORDER BY c.created_at DESC, c.id, ci.product_id
            "#,
        )
        .bind(tenant.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(rows.into_iter().map(CampaignBinding::from).collect())
    }
}
