use std::net::SocketAddr;
use std::sync::Arc;
use vitrina_analytics::AnalyticsAggregator;
use vitrina_api::{app, AppState};
use vitrina_core::Storefront;
use vitrina_offer::OfferResolver;
use vitrina_store::{DbClient, PgCampaignStore, PgCatalogStore, PgEventStore, RedisClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrina_api=debug,vitrina_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = vitrina_store::app_config::Config::load()?;
    tracing::info!("Starting Vitrina API on port {}", config.server.port);

    let db = DbClient::new(&config.database).await?;
    db.migrate().await?;

    let storefront = Storefront::new(
        Arc::new(PgCatalogStore::new(db.pool.clone())),
        Arc::new(PgCampaignStore::new(db.pool.clone())),
        Arc::new(PgEventStore::new(db.pool.clone())),
    )
    .with_resolver(OfferResolver::new(config.offers.tie_break))
    .with_aggregator(AnalyticsAggregator::new(config.analytics.top_n, config.analytics.window));

    let redis = match &config.redis {
        Some(redis) => Some(Arc::new(RedisClient::new(&redis.url)?)),
        None => {
            tracing::info!("No Redis configured, rate limiting disabled");
            None
        }
    };

    let app_state = AppState {
        storefront: Arc::new(storefront),
        redis,
        rate_limit: config.rate_limit.clone(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
