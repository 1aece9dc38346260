use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;
use vitrina_analytics::{AnalyticsAggregator, DashboardStats, Event};
use vitrina_catalog::product::scope_active;
use vitrina_catalog::{EffectiveProduct, FilterCriteria, FilterParams, SearchFilterEngine, Tenant};
use vitrina_offer::{CampaignBinding, FeaturedCampaign, OfferResolver};
use vitrina_shared::models::events::TrackEventRequest;
use vitrina_shared::tenant::{TenantId, TenantScoped};

use crate::repository::{CampaignStore, CatalogStore, EventStore};
use crate::{CoreError, CoreResult};

/// One storefront listing: the tenant, its banner campaign and the filtered catalog.
#[derive(Debug, Clone, Serialize)]
pub struct StorefrontPage {
    #[serde(rename = "store")]
    pub tenant: Tenant,
    pub featured: Option<FeaturedCampaign>,
    pub products: Vec<EffectiveProduct>,
}

/// Entry point for the storefront read paths and event tracking.
///
/// Products and campaigns are fetched independently, without a cross-store
/// transaction. A campaign toggled between the two reads may or may not apply to
/// that one response; the next request sees the new state.
#[derive(Clone)]
pub struct Storefront {
    catalog: Arc<dyn CatalogStore>,
    campaigns: Arc<dyn CampaignStore>,
    events: Arc<dyn EventStore>,
    resolver: OfferResolver,
    aggregator: AnalyticsAggregator,
}

impl Storefront {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        campaigns: Arc<dyn CampaignStore>,
        events: Arc<dyn EventStore>,
    ) -> Self {
        Self {
            catalog,
            campaigns,
            events,
            resolver: OfferResolver::default(),
            aggregator: AnalyticsAggregator::default(),
        }
    }

    pub fn with_resolver(mut self, resolver: OfferResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_aggregator(mut self, aggregator: AnalyticsAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    pub async fn find_tenant(&self, slug: &str) -> CoreResult<Tenant> {
        match self.catalog.find_tenant(slug).await {
            Ok(Some(tenant)) => Ok(tenant),
            Ok(None) => Err(CoreError::NotFound(format!("store '{}' not found", slug))),
            Err(e) => {
                warn!("Tenant lookup for '{}' failed: {}", slug, e);
                Err(CoreError::StoreUnavailable(e.to_string()))
            }
        }
    }

    /// Active catalog of `tenant` with offers applied, filtered by `params`.
    ///
    /// Malformed price bounds are rejected before any store is read.
    pub async fn resolve_catalog(&self, tenant: TenantId, params: &FilterParams) -> CoreResult<Vec<EffectiveProduct>> {
        let criteria = FilterCriteria::from_params(params)?;
        let (resolved, _) = self.load_resolved(tenant).await;
        Ok(SearchFilterEngine::filter(tenant, &resolved, &criteria))
    }

    /// Full storefront listing. The featured campaign is only offered when no text query is present.
    pub async fn storefront_page(&self, tenant: &Tenant, params: &FilterParams) -> CoreResult<StorefrontPage> {
        let criteria = FilterCriteria::from_params(params)?;
        let (resolved, bindings) = self.load_resolved(tenant.id).await;

        let featured = if criteria.has_text() {
            None
        } else {
            self.resolver.featured(tenant.id, &resolved, &bindings)
        };
        let products = SearchFilterEngine::filter(tenant.id, &resolved, &criteria);

        debug!(
            "Catalog for {}: {} listed, featured campaign: {:?}",
            tenant.slug,
            products.len(),
            featured.as_ref().map(|f| f.campaign.id)
        );

        Ok(StorefrontPage {
            tenant: tenant.clone(),
            featured,
            products,
        })
    }

    /// One product page: the active product of `tenant` with `product_slug`, with its
    /// offer resolved the same way as in the listing.
    pub async fn product_detail(&self, tenant: TenantId, product_slug: &str) -> CoreResult<EffectiveProduct> {
        let not_found = || CoreError::NotFound(format!("product '{}' not found", product_slug));

        let product = match self.catalog.find_product(tenant, product_slug).await {
            Ok(Some(product)) if product.is_active && product.belongs_to(tenant) => product,
            Ok(_) => return Err(not_found()),
            Err(e) => {
                warn!("Product lookup for '{}' failed: {}", product_slug, e);
                return Err(CoreError::StoreUnavailable(e.to_string()));
            }
        };

        let bindings = match self.campaigns.list_active_campaign_items(tenant).await {
            Ok(bindings) => bindings,
            Err(e) => {
                warn!("Campaigns unavailable for tenant {}, showing base price: {}", tenant, e);
                Vec::new()
            }
        };

        self.resolver
            .resolve(tenant, std::slice::from_ref(&product), &bindings)
            .into_iter()
            .next()
            .ok_or_else(not_found)
    }

    /// Top searches and clicked products over the most recent event window.
    ///
    /// The event log carries no tenant, so the window is shared by every store. Click
    /// names resolve only against `tenant`'s own products: ids that were deleted or
    /// that belong to another store both show as "Producto Eliminado", and such
    /// clicks compete for the same top-N slots.
    pub async fn compute_dashboard_stats(&self, tenant: TenantId) -> DashboardStats {
        let events = match self.events.list_recent(self.aggregator.window()).await {
            Ok(events) => events,
            Err(e) => {
                warn!("Event log unavailable, dashboard shows no activity: {}", e);
                Vec::new()
            }
        };

        let products = match self.catalog.list_products(tenant).await {
            Ok(products) => products.into_iter().filter(|p| p.belongs_to(tenant)).collect(),
            Err(e) => {
                warn!("Catalog unavailable for tenant {}, clicks will not be named: {}", tenant, e);
                Vec::new()
            }
        };

        self.aggregator.aggregate(&events, &products)
    }

    /// Validate and append one interaction event.
    ///
    /// A failed append is reported as `TrackingFailure` and never retried here.
    pub async fn track_event(&self, request: TrackEventRequest) -> CoreResult<Event> {
        let session_id = request.session_id.trim();
        if session_id.is_empty() {
            return Err(CoreError::ValidationError("session_id is required".to_string()));
        }

        let product_id = match request.product_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                Uuid::parse_str(raw)
                    .map_err(|_| CoreError::ValidationError(format!("invalid product_id: {}", raw)))?,
            ),
            None => None,
        };
        let query = request.query.filter(|q| !q.trim().is_empty());

        let event = Event::new(request.event_type, session_id.to_string(), product_id, query);

        self.events.append(&event).await.map_err(|e| {
            warn!("Failed to record {} event: {}", event.event_type, e);
            CoreError::TrackingFailure(e.to_string())
        })?;

        debug!("Tracked event {:?}", event);
        Ok(event)
    }

    /// Tenant-scoped products with offers resolved, plus the bindings used.
    /// Store failures degrade to "no products" / "no offers".
    async fn load_resolved(&self, tenant: TenantId) -> (Vec<EffectiveProduct>, Vec<CampaignBinding>) {
        let products = match self.catalog.list_active_products(tenant).await {
            Ok(products) => scope_active(tenant, products),
            Err(e) => {
                warn!("Catalog unavailable for tenant {}, listing nothing: {}", tenant, e);
                return (Vec::new(), Vec::new());
            }
        };

        if products.is_empty() {
            return (Vec::new(), Vec::new());
        }

        let bindings = match self.campaigns.list_active_campaign_items(tenant).await {
            Ok(bindings) => bindings,
            Err(e) => {
                warn!("Campaigns unavailable for tenant {}, showing base prices: {}", tenant, e);
                Vec::new()
            }
        };

        (self.resolver.resolve(tenant, &products, &bindings), bindings)
    }
}
