use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;
use vitrina_analytics::Event;
use vitrina_core::repository::{EventStore, StoreError, StoreResult};
use vitrina_shared::Masked;

use crate::database::unavailable;

pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    #[sqlx(rename = "type")]
    event_type: String,
    session_id: String,
    product_id: Option<Uuid>,
    query: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = String;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Event {
            id: row.id,
            event_type: row.event_type.parse()?,
            session_id: Masked(row.session_id),
            product_id: row.product_id,
            query: row.query,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn list_recent(&self, limit: usize) -> StoreResult<Vec<Event>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, type, session_id, product_id, query, created_at FROM events ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)?;

        let events = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                Event::try_from(row)
                    .map_err(|e| warn!("Skipping unreadable event {}: {}", id, e))
                    .ok()
            })
            .collect();

        Ok(events)
    }

    async fn append(&self, event: &Event) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO events (id, type, session_id, product_id, query, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(event.id)
        .bind(event.event_type.as_str())
        .bind(event.session_id.expose())
        .bind(event.product_id)
        .bind(event.query.as_deref())
        .bind(event.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) => StoreError::Rejected(db.to_string()),
            other => unavailable(other),
        })?;

        Ok(())
    }
}
