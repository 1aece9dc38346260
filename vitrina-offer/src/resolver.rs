use std::collections::{HashMap, HashSet};
use uuid::Uuid;
use vitrina_catalog::pricing::is_valid_price;
use vitrina_catalog::{EffectiveProduct, Product, SearchFilterEngine};
use vitrina_shared::tenant::{TenantId, TenantScoped};

use crate::models::{Campaign, CampaignBinding, FeaturedCampaign};
use crate::rules::{OfferCandidate, TieBreakPolicy};

/// Merges a tenant's products with the campaign overrides that currently apply to them.
///
/// Resolution is a pure function of its inputs: missing or malformed campaign data
/// means "no discount", never a wrong discount.
#[derive(Debug, Clone, Default)]
pub struct OfferResolver {
    policy: TieBreakPolicy,
}

impl OfferResolver {
    pub fn new(policy: TieBreakPolicy) -> Self {
        Self { policy }
    }

    /// Produce one `EffectiveProduct` per input product, in input order.
    pub fn resolve(
        &self,
        tenant: TenantId,
        products: &[Product],
        bindings: &[CampaignBinding],
    ) -> Vec<EffectiveProduct> {
        let winners = self.winning_offers(tenant, products, bindings);

        products
            .iter()
            .map(|product| match winners.get(&product.id) {
                Some(candidate) => EffectiveProduct::with_offer(product.clone(), candidate.offer_price),
                None => EffectiveProduct::without_offer(product.clone()),
            })
            .collect()
    }

    /// Index product id -> winning offer, considering only usable bindings for `tenant`'s products.
    fn winning_offers(
        &self,
        tenant: TenantId,
        products: &[Product],
        bindings: &[CampaignBinding],
    ) -> HashMap<Uuid, OfferCandidate> {
        let known: HashSet<Uuid> = products
            .iter()
            .filter(|p| p.belongs_to(tenant))
            .map(|p| p.id)
            .collect();

        let mut winners: HashMap<Uuid, OfferCandidate> = HashMap::new();

        for (item, campaign) in bindings {
            if !is_usable(item.campaign_id, item.offer_price, campaign) {
                continue;
            }
            // Items pointing at another tenant's (or a deleted) product are dropped.
            if !known.contains(&item.product_id) {
                continue;
            }

            let candidate = OfferCandidate {
                offer_price: item.offer_price,
                campaign_id: campaign.id,
                campaign_created_at: campaign.created_at,
            };

            winners
                .entry(item.product_id)
                .and_modify(|incumbent| {
                    if self.policy.prefers(&candidate, incumbent) {
                        *incumbent = candidate;
                    }
                })
                .or_insert(candidate);
        }

        winners
    }

    /// Pick the banner campaign for a storefront page.
    ///
    /// The newest active campaign (ties by id) with at least one item among the
    /// `resolved` catalog wins. Its products are taken from `resolved`, so the banner
    /// shows the same prices as the listing, ordered newest first.
    pub fn featured(
        &self,
        tenant: TenantId,
        resolved: &[EffectiveProduct],
        bindings: &[CampaignBinding],
    ) -> Option<FeaturedCampaign> {
        let listed: HashMap<Uuid, &EffectiveProduct> = resolved
            .iter()
            .filter(|p| p.belongs_to(tenant) && p.product.is_active)
            .map(|p| (p.product.id, p))
            .collect();

        let campaign = bindings
            .iter()
            .filter(|(item, campaign)| is_usable(item.campaign_id, item.offer_price, campaign))
            .filter(|(item, _)| listed.contains_key(&item.product_id))
            .map(|(_, campaign)| campaign)
            .min_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)))?
            .clone();

        let mut seen = HashSet::new();
        let mut products: Vec<EffectiveProduct> = bindings
            .iter()
            .filter(|(item, _)| item.campaign_id == campaign.id)
            .filter_map(|(item, _)| listed.get(&item.product_id))
            .filter(|p| seen.insert(p.product.id))
            .map(|p| (*p).clone())
            .collect();
        SearchFilterEngine::sort_newest_first(&mut products);

        Some(FeaturedCampaign { campaign, products })
    }
}

fn is_usable(item_campaign_id: Uuid, offer_price: f64, campaign: &Campaign) -> bool {
    campaign.is_active && item_campaign_id == campaign.id && is_valid_price(offer_price)
}
