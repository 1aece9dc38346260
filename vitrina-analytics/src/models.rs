use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use vitrina_shared::models::events::EventType;
use vitrina_shared::Masked;

/// An immutable visitor interaction record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub session_id: Masked<String>,
    /// Set for click and view events.
    pub product_id: Option<Uuid>,
    /// Set for search events.
    pub query: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        event_type: EventType,
        session_id: String,
        product_id: Option<Uuid>,
        query: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            session_id: Masked(session_id),
            product_id,
            query,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchTermStat {
    pub term: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductClickStat {
    pub product_id: Uuid,
    pub name: String,
    pub count: u64,
}

/// Dashboard view over the most recent window of events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_products: u64,
    pub total_interactions: u64,
    pub top_searches: Vec<SearchTermStat>,
    pub top_products: Vec<ProductClickStat>,
}
