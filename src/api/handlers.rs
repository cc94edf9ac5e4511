//! API Handlers
//!
//! HTTP request handlers for the product endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::cache::InMemoryProductCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, Product, ProductId, ProductRequest, StatsResponse};
use crate::service::ProductService;
use crate::store::{InMemoryProductStore, ProductStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Product operations with the cache policy applied
    pub service: ProductService,
    /// The product cache, kept for statistics and background cleanup
    pub cache: InMemoryProductCache,
}

impl AppState {
    /// Wires a service over `store` and `cache`.
    pub fn new(store: Arc<dyn ProductStore>, cache: InMemoryProductCache) -> Self {
        let service = ProductService::new(store, Arc::new(cache.clone()));
        Self { service, cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses an in-memory store and a cache sized by the Config.
    pub fn from_config(config: &Config) -> Self {
        let cache = InMemoryProductCache::new(config.max_entries, config.default_ttl);
        Self::new(Arc::new(InMemoryProductStore::new()), cache)
    }
}

/// Handler for POST /api/product
///
/// Creates a product and answers 201 with its assigned id.
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = req.into_new_product()?;
    let created = state.service.create(product).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for PUT /api/product
///
/// Replaces name and price of the product named by the body's `id`.
pub async fn update_product_handler(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<Product>> {
    let product = req.into_product()?;
    let updated = state.service.update(product).await?;

    Ok(Json(updated))
}

/// Handler for DELETE /api/product/:id
///
/// Answers 204 whether or not the product existed.
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    state.service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /api/product/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = state.service.get(id).await?;

    Ok(Json(product))
}

/// Handler for GET /stats
///
/// Returns the product cache's statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;

    Json(StatsResponse::from_stats(&stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
