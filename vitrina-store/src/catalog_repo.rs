use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use vitrina_catalog::{Product, Tenant};
use vitrina_core::repository::{CatalogStore, StoreResult};
use vitrina_shared::TenantId;

use crate::database::unavailable;

pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TenantRow {
    id: Uuid,
    name: String,
    slug: String,
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    store_id: Uuid,
    name: String,
    slug: String,
    description: Option<String>,
    base_price: Option<f64>,
    category: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            tenant_id: TenantId::new(row.store_id),
            name: row.name,
            slug: row.slug,
            description: row.description,
            base_price: row.base_price,
            category: row.category,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

const PRODUCT_COLUMNS: &str =
    "id, store_id, name, slug, description, base_price, category, is_active, created_at";

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn find_tenant(&self, slug: &str) -> StoreResult<Option<Tenant>> {
        let row = sqlx::query_as::<_, TenantRow>("SELECT id, name, slug FROM stores WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable)?;

        Ok(row.map(|r| Tenant {
            id: TenantId::new(r.id),
            name: r.name,
            slug: r.slug,
        }))
    }

    async fn list_active_products(&self, tenant: TenantId) -> StoreResult<Vec<Product>> {
        let sql = format!(
            "SELECT {} FROM products WHERE store_id = $1 AND is_active = TRUE ORDER BY created_at DESC, id",
            PRODUCT_COLUMNS
        );
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(tenant.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(unavailable)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn list_products(&self, tenant: TenantId) -> StoreResult<Vec<Product>> {
        let sql = format!(
            "SELECT {} FROM products WHERE store_id = $1 ORDER BY created_at DESC, id",
            PRODUCT_COLUMNS
        );
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(tenant.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(unavailable)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_product(&self, tenant: TenantId, slug: &str) -> StoreResult<Option<Product>> {
        let sql = format!(
            "SELECT {} FROM products WHERE store_id = $1 AND slug = $2 AND is_active = TRUE",
            PRODUCT_COLUMNS
        );
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(tenant.as_uuid())
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable)?;

        Ok(row.map(Product::from))
    }
}
