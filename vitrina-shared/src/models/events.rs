use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of storefront interaction a visitor produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    View,
    Click,
    Search,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::View => "view",
            EventType::Click => "click",
            EventType::Search => "search",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(EventType::View),
            "click" => Ok(EventType::Click),
            "search" => Ok(EventType::Search),
            other => Err(format!("unknown event type: {}", other)),
        }
    }
}

/// Body of `POST /api/events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackEventRequest {
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub product_id: Option<String>,
    pub session_id: String,
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackEventResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_request_deserialization() {
        let json = r#"{ "type": "search", "session_id": "abc", "query": "Pala" }"#;
        let req: TrackEventRequest = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(req.event_type, EventType::Search);
        assert_eq!(req.query.as_deref(), Some("Pala"));
        assert!(req.product_id.is_none());
    }

    #[test]
    fn test_unknown_event_type_is_rejected() {
        let json = r#"{ "type": "purchase", "session_id": "abc" }"#;
        assert!(serde_json::from_str::<TrackEventRequest>(json).is_err());
        assert!("purchase".parse::<EventType>().is_err());
    }
}
