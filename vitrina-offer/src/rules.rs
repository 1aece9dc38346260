use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// How to pick a winner when several active campaigns offer the same product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakPolicy {
    /// Most recently created campaign wins; equal timestamps fall back to the lower price.
    #[default]
    NewestCampaign,
    /// Lowest offer price wins; equal prices fall back to the newer campaign.
    LowestPrice,
}

/// One eligible offer for a product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfferCandidate {
    pub offer_price: f64,
    pub campaign_id: Uuid,
    pub campaign_created_at: DateTime<Utc>,
}

impl TieBreakPolicy {
    /// Total order over candidates: `Ordering::Less` means `a` beats `b`.
    /// Campaign id is the last key so the winner never depends on input order.
    pub fn rank(&self, a: &OfferCandidate, b: &OfferCandidate) -> Ordering {
        let newest = b.campaign_created_at.cmp(&a.campaign_created_at);
        let cheapest = a.offer_price.total_cmp(&b.offer_price);

        let primary = match self {
            TieBreakPolicy::NewestCampaign => newest.then(cheapest),
            TieBreakPolicy::LowestPrice => cheapest.then(newest),
        };
        primary.then_with(|| a.campaign_id.cmp(&b.campaign_id))
    }

    pub fn prefers(&self, challenger: &OfferCandidate, incumbent: &OfferCandidate) -> bool {
        self.rank(challenger, incumbent) == Ordering::Less
    }
}
