use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use vitrina_analytics::DashboardStats;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/admin/stores/{slug}/dashboard", get(get_dashboard))
}

/// GET /v1/admin/stores/{slug}/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DashboardStats>, AppError> {
    let tenant = state.storefront.find_tenant(&slug).await?;
    let stats = state.storefront.compute_dashboard_stats(tenant.id).await;
    Ok(Json(stats))
}
