use std::collections::HashMap;
use uuid::Uuid;
use vitrina_catalog::Product;
use vitrina_shared::models::events::EventType;

use crate::counter::RankedCounter;
use crate::models::{DashboardStats, Event, ProductClickStat, SearchTermStat};

pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_WINDOW: usize = 2000;

/// Display name for clicks on products missing from the snapshot.
pub const DELETED_PRODUCT_LABEL: &str = "Producto Eliminado";

/// Turns a bounded, most-recent-first batch of events into top-N dashboard views.
///
/// This is an approximation over the trailing window only. Nothing older than
/// `window` events is ever considered.
#[derive(Debug, Clone)]
pub struct AnalyticsAggregator {
    top_n: usize,
    window: usize,
}

impl Default for AnalyticsAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N, DEFAULT_WINDOW)
    }
}

impl AnalyticsAggregator {
    pub fn new(top_n: usize, window: usize) -> Self {
        Self { top_n, window }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn aggregate(&self, events: &[Event], products: &[Product]) -> DashboardStats {
        let events = &events[..events.len().min(self.window)];

        let mut searches: RankedCounter<String> = RankedCounter::new();
        let mut clicks: RankedCounter<Uuid> = RankedCounter::new();

        for event in events {
            match event.event_type {
                EventType::Search => {
                    if let Some(term) = event.query.as_deref().and_then(normalize_term) {
                        searches.add(term);
                    }
                }
                EventType::Click => {
                    if let Some(product_id) = event.product_id {
                        clicks.add(product_id);
                    }
                }
                EventType::View => {}
            }
        }

        let names: HashMap<Uuid, &str> = products
            .iter()
            .map(|p| (p.id, p.name.as_str()))
            .collect();

        let top_searches = searches
            .top(self.top_n)
            .into_iter()
            .map(|(term, count)| SearchTermStat { term, count })
            .collect();

        let top_products = clicks
            .top(self.top_n)
            .into_iter()
            .map(|(product_id, count)| ProductClickStat {
                product_id,
                name: names
                    .get(&product_id)
                    .copied()
                    .unwrap_or(DELETED_PRODUCT_LABEL)
                    .to_string(),
                count,
            })
            .collect();

        DashboardStats {
            total_products: products.len() as u64,
            total_interactions: events.len() as u64,
            top_searches,
            top_products,
        }
    }
}

/// Lower-case and trim a search query. Blank queries are not counted.
pub fn normalize_term(raw: &str) -> Option<String> {
    let term = raw.trim().to_lowercase();
    if term.is_empty() {
        None
    } else {
        Some(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use vitrina_shared::{Masked, TenantId};

    fn event(n: i64, event_type: EventType, product_id: Option<Uuid>, query: Option<&str>) -> Event {
        Event {
            id: Uuid::from_u128(n as u128),
            event_type,
            session_id: Masked("session".to_string()),
            product_id,
            query: query.map(str::to_string),
            created_at: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap() - Duration::minutes(n),
        }
    }

    fn search(n: i64, q: &str) -> Event {
        event(n, EventType::Search, None, Some(q))
    }

    fn click(n: i64, product: u128) -> Event {
        event(n, EventType::Click, Some(Uuid::from_u128(product)), None)
    }

    fn product(id: u128, name: &str) -> Product {
        Product {
            id: Uuid::from_u128(id),
            tenant_id: TenantId::new(Uuid::from_u128(1)),
            name: name.to_string(),
            slug: name.to_lowercase(),
            description: None,
            base_price: Some(10.0),
            category: None,
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_search_terms_are_normalized() {
        let events = vec![search(1, "Pala"), search(2, " pala "), search(3, "rastrillo")];
        let stats = AnalyticsAggregator::default().aggregate(&events, &[]);

        assert_eq!(
            stats.top_searches,
            vec![
                SearchTermStat { term: "pala".into(), count: 2 },
                SearchTermStat { term: "rastrillo".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_blank_and_missing_queries_are_skipped() {
        let events = vec![search(1, "   "), event(2, EventType::Search, None, None)];
        let stats = AnalyticsAggregator::default().aggregate(&events, &[]);
        assert!(stats.top_searches.is_empty());
        assert_eq!(stats.total_interactions, 2);
    }

    #[test]
    fn test_clicks_resolve_names_and_deleted_sentinel() {
        let products = vec![product(1, "Machete")];
        let events = vec![click(1, 1), click(2, 99), click(3, 1)];
        let stats = AnalyticsAggregator::default().aggregate(&events, &products);

        assert_eq!(stats.top_products.len(), 2);
        assert_eq!(stats.top_products[0].name, "Machete");
        assert_eq!(stats.top_products[0].count, 2);
        assert_eq!(stats.top_products[1].name, DELETED_PRODUCT_LABEL);
        assert_eq!(stats.top_products[1].product_id, Uuid::from_u128(99));
    }

    #[test]
    fn test_views_and_clickless_events_do_not_rank() {
        let events = vec![
            event(1, EventType::View, Some(Uuid::from_u128(1)), None),
            event(2, EventType::Click, None, None),
            event(3, EventType::Click, None, Some("pala")),
        ];
        let stats = AnalyticsAggregator::default().aggregate(&events, &[product(1, "Pala")]);
        assert!(stats.top_products.is_empty());
        assert!(stats.top_searches.is_empty());
        assert_eq!(stats.total_products, 1);
    }

    #[test]
    fn test_ties_follow_window_order() {
        // Most recent first: "semillas" appears before "abono" in the window.
        let events = vec![search(1, "semillas"), search(2, "abono"), search(3, "abono"), search(4, "semillas")];
        let stats = AnalyticsAggregator::default().aggregate(&events, &[]);
        let terms: Vec<&str> = stats.top_searches.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["semillas", "abono"]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let events: Vec<Event> = (0..8).map(|i| search(i, &format!("term{}", i))).collect();
        assert_eq!(AnalyticsAggregator::default().aggregate(&events, &[]).top_searches.len(), 5);
        assert_eq!(AnalyticsAggregator::new(3, DEFAULT_WINDOW).aggregate(&events, &[]).top_searches.len(), 3);
    }

    #[test]
    fn test_window_bounds_what_is_seen() {
        let events = vec![search(1, "nuevo"), search(2, "viejo"), search(3, "viejo")];
        let stats = AnalyticsAggregator::new(5, 1).aggregate(&events, &[]);
        assert_eq!(stats.total_interactions, 1);
        assert_eq!(stats.top_searches, vec![SearchTermStat { term: "nuevo".into(), count: 1 }]);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let products = vec![product(1, "Machete"), product(2, "Pala")];
        let events = vec![click(1, 2), search(2, "Pala"), click(3, 1), click(4, 2), search(5, "machete")];
        let aggregator = AnalyticsAggregator::default();

        let first = serde_json::to_string(&aggregator.aggregate(&events, &products)).unwrap();
        let second = serde_json::to_string(&aggregator.aggregate(&events, &products)).unwrap();
        assert_eq!(first, second);
    }
}
