//! Product Service
//!
//! Mediates every read and write of a product through the store and the
//! cache. The store is the operation of record: the cache is written only
//! after the store confirmed success, and a failing cache never fails the
//! request. No lock spans the store call and the cache call.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::ProductCache;
use crate::error::{CacheError, ProductError, Result};
use crate::models::{NewProduct, Product, ProductId};
use crate::store::ProductStore;

// == Product Service ==
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    cache: Arc<dyn ProductCache>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>, cache: Arc<dyn ProductCache>) -> Self {
        Self { store, cache }
    }

    // == Create ==
    /// Persists a new product, then writes it through to the cache.
    pub async fn create(&self, product: NewProduct) -> Result<Product> {
        let created = self.store.insert(product).await?;
        info!(id = created.id, "product created");

        self.cache_put(&created).await;
        Ok(created)
    }

    // == Update ==
    /// Replaces name and price of an existing product, then overwrites the
    /// cached copy with the new value.
    ///
    /// Fails with `NotFound` when no stored row has `product.id`; the cache
    /// is left untouched in that case.
    pub async fn update(&self, product: Product) -> Result<Product> {
        let mut existing = self
            .store
            .find_by_id(product.id)
            .await?
            .ok_or(ProductError::NotFound(product.id))?;

        existing.name = product.name;
        existing.price = product.price;

        let updated = self.store.save(existing).await?;
        info!(id = updated.id, "product updated");

        self.cache_put(&updated).await;
        Ok(updated)
    }

    // == Delete ==
    /// Removes the stored row, then evicts the cached copy.
    ///
    /// Deleting an id that does not exist succeeds.
    pub async fn delete(&self, id: ProductId) -> Result<()> {
        self.store.delete_by_id(id).await?;
        info!(id, "product deleted");

        if let Err(err) = self.cache.evict(id).await {
            log_cache_failure("evict", id, &err);
        }
        Ok(())
    }

    // == Get ==
    /// Read-through lookup: cache first, store on miss.
    ///
    /// A store hit populates the cache before returning. A cache read error
    /// is treated as a miss.
    pub async fn get(&self, id: ProductId) -> Result<Product> {
        match self.cache.get(id).await {
            Ok(Some(product)) => {
                debug!(id, "cache hit");
                return Ok(product);
            }
            Ok(None) => debug!(id, "cache miss"),
            Err(err) => log_cache_failure("get", id, &err),
        }

        let product = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        self.cache_put(&product).await;
        Ok(product)
    }

    async fn cache_put(&self, product: &Product) {
        if let Err(err) = self.cache.put(product.id, product.clone()).await {
            log_cache_failure("put", product.id, &err);
        }
    }
}

fn log_cache_failure(op: &str, id: ProductId, err: &CacheError) {
    warn!(id, op, error = %err, "cache operation failed, continuing with store result");
}
