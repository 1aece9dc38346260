use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use vitrina_catalog::EffectiveProduct;

/// A promotional event. Campaigns carry no tenant of their own; they reach a
/// tenant only through the products their items reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: Uuid,
    pub title: String,
    pub banner_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Binding of one product to a campaign at a fixed offer price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignItem {
    pub campaign_id: Uuid,
    pub product_id: Uuid,
    pub offer_price: f64,
}

/// An item joined with the campaign that owns it.
pub type CampaignBinding = (CampaignItem, Campaign);

/// The banner campaign shown above the catalog, with its products already resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturedCampaign {
    pub campaign: Campaign,
    pub products: Vec<EffectiveProduct>,
}
