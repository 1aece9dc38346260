use serde::Deserialize;
use std::env;
use vitrina_analytics::{DEFAULT_TOP_N, DEFAULT_WINDOW};
use vitrina_offer::TieBreakPolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub redis: Option<RedisConfig>,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub offers: OffersConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 { 5 }

#[derive(Debug, Deserialize, Clone)]
pub struct RedisConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RateLimitConfig {
    /// Requests allowed per client IP within one window.
    pub requests: i64,
    pub window_seconds: i64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { requests: 100, window_seconds: 60 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    /// How many of the most recent events the dashboard looks at.
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_window() -> usize { DEFAULT_WINDOW }
fn default_top_n() -> usize { DEFAULT_TOP_N }

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self { window: DEFAULT_WINDOW, top_n: DEFAULT_TOP_N }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OffersConfig {
    #[serde(default)]
    pub tie_break: TieBreakPolicy,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `VITRINA__SERVER__PORT=8081`
            .add_source(config::Environment::with_prefix("VITRINA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
