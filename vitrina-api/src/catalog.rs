use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use vitrina_catalog::{EffectiveProduct, FilterParams};
use vitrina_core::StorefrontPage;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/stores/{slug}/catalog", get(get_catalog))
        .route("/v1/stores/{slug}/products/{product_slug}", get(get_product))
}

/// GET /v1/stores/{slug}/catalog?q=&cat=&min=&max=
/// Active catalog with campaign prices applied, plus the featured campaign when not searching.
pub async fn get_catalog(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<FilterParams>,
) -> Result<Json<StorefrontPage>, AppError> {
    let tenant = state.storefront.find_tenant(&slug).await?;
    let page = state.storefront.storefront_page(&tenant, &params).await?;
    Ok(Json(page))
}

/// GET /v1/stores/{slug}/products/{product_slug}
pub async fn get_product(
    State(state): State<AppState>,
    Path((slug, product_slug)): Path<(String, String)>,
) -> Result<Json<EffectiveProduct>, AppError> {
    let tenant = state.storefront.find_tenant(&slug).await?;
    let product = state.storefront.product_detail(tenant.id, &product_slug).await?;
    Ok(Json(product))
}
