use std::sync::Arc;
use vitrina_core::Storefront;
use vitrina_store::app_config::RateLimitConfig;
use vitrina_store::RedisClient;

#[derive(Clone)]
pub struct AppState {
    pub storefront: Arc<Storefront>,
    /// Rate limiting is skipped when no Redis is configured.
    pub redis: Option<Arc<RedisClient>>,
    pub rate_limit: RateLimitConfig,
}

impl AppState {
    pub fn new(storefront: Storefront) -> Self {
        Self {
            storefront: Arc::new(storefront),
            redis: None,
            rate_limit: RateLimitConfig::default(),
        }
    }
}
