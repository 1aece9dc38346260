use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vitrina_shared::tenant::{TenantId, TenantScoped};

use crate::pricing;

/// A store (tenant) as addressed from the storefront URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub slug: String,
}

/// Core product structure, owned by exactly one tenant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Price before any campaign override. `None` means "ask for price".
    pub base_price: Option<f64>,
    pub category: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl TenantScoped for Product {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}

/// A product merged with the campaign override that currently applies to it, if any.
/// Derived on every resolution and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffectiveProduct {
    #[serde(flatten)]
    pub product: Product,
    pub is_on_offer: bool,
    pub offer_price: Option<f64>,
    /// Base price, present only while on offer.
    pub original_price: Option<f64>,
    pub discount_percent: Option<u32>,
}

impl EffectiveProduct {
    pub fn without_offer(product: Product) -> Self {
        Self {
            product,
            is_on_offer: false,
            offer_price: None,
            original_price: None,
            discount_percent: None,
        }
    }

    pub fn with_offer(product: Product, offer_price: f64) -> Self {
        let original_price = product.base_price;
        Self {
            discount_percent: pricing::discount_percent(original_price, offer_price),
            product,
            is_on_offer: true,
            offer_price: Some(offer_price),
            original_price,
        }
    }

    pub fn effective_price(&self) -> Option<f64> {
        pricing::effective_price(self.product.base_price, self.offer_price)
    }
}

impl TenantScoped for EffectiveProduct {
    fn tenant_id(&self) -> TenantId {
        self.product.tenant_id
    }
}

/// Something that can be listed and filtered as part of a tenant catalog.
pub trait CatalogEntry {
    fn product(&self) -> &Product;

    /// Price a buyer would actually pay right now.
    fn effective_price(&self) -> Option<f64>;
}

impl CatalogEntry for Product {
    fn product(&self) -> &Product {
        self
    }

    fn effective_price(&self) -> Option<f64> {
        self.base_price
    }
}

impl CatalogEntry for EffectiveProduct {
    fn product(&self) -> &Product {
        &self.product
    }

    fn effective_price(&self) -> Option<f64> {
        EffectiveProduct::effective_price(self)
    }
}

/// Keep only the active products owned by `tenant`, preserving order.
pub fn scope_active(tenant: TenantId, products: Vec<Product>) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.is_active && p.belongs_to(tenant))
        .collect()
}

/// True when the entry may appear in `tenant`'s storefront listing.
pub fn is_listable<T: CatalogEntry>(tenant: TenantId, entry: &T) -> bool {
    let product = entry.product();
    product.is_active && product.belongs_to(tenant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn product(tenant: TenantId, active: bool) -> Product {
        Product {
            id: Uuid::new_v4(),
            tenant_id: tenant,
            name: "Pala de punta".to_string(),
            slug: "pala-de-punta".to_string(),
            description: None,
            base_price: Some(25.0),
            category: Some("Herramientas".to_string()),
            is_active: active,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_scope_active_drops_foreign_and_inactive() {
        let tenant = TenantId::new(Uuid::new_v4());
        let other = TenantId::new(Uuid::new_v4());
        let keep = product(tenant, true);
        let products = vec![product(other, true), keep.clone(), product(tenant, false)];

        let scoped = scope_active(tenant, products);
        assert_eq!(scoped, vec![keep]);
    }

    #[test]
    fn test_effective_product_serializes_flat() {
        let tenant = TenantId::new(Uuid::new_v4());
        let effective = EffectiveProduct::with_offer(product(tenant, true), 20.0);
        let json = serde_json::to_value(&effective).unwrap();

        assert_eq!(json["name"], "Pala de punta");
        assert_eq!(json["is_on_offer"], true);
        assert_eq!(json["offer_price"], 20.0);
        assert_eq!(json["original_price"], 25.0);
        assert_eq!(json["discount_percent"], 20);
    }

    #[test]
    fn test_without_offer_uses_base_price() {
        let tenant = TenantId::new(Uuid::new_v4());
        let effective = EffectiveProduct::without_offer(product(tenant, true));
        assert!(!effective.is_on_offer);
        assert_eq!(effective.original_price, None);
        assert_eq!(effective.effective_price(), Some(25.0));
    }
}
