use redis::{AsyncCommands, RedisResult};

#[derive(Clone)]
pub struct RedisClient {
    client: redis::Client,
}

/// Outcome of one hit on a fixed-window counter, given its value after `INCR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowHit {
    pub allowed: bool,
    /// First hit of a window: the only one that sets the expiry.
    pub opens_window: bool,
}

pub(crate) fn classify_hit(count: i64, limit: i64) -> WindowHit {
    WindowHit {
        allowed: count <= limit,
        opens_window: count == 1,
    }
}

impl RedisClient {
    pub fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        Ok(Self { client })
    }

    /// Fixed-window counter: true while `key` has been hit at most `limit` times in the window.
    ///
    /// The window starts at the first hit and is never extended by later ones.
    pub async fn check_rate_limit(&self, key: &str, limit: i64, window_seconds: i64) -> RedisResult<bool> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let count: i64 = conn.incr(key, 1).await?;
        let hit = classify_hit(count, limit);
        if hit.opens_window {
            conn.expire::<_, ()>(key, window_seconds).await?;
        }

        Ok(hit.allowed)
    }
}
