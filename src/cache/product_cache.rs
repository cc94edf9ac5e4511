//! Product Cache
//!
//! The cache seam used by the product service, and its in-process
//! implementation backed by [`CacheStore`].

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore};
use crate::error::CacheError;
use crate::models::{Product, ProductId};

/// Key/value side-store for products, keyed by product id.
///
/// Implementations own their lifetime policy; callers only see values
/// appear and disappear.
#[async_trait]
pub trait ProductCache: Send + Sync {
    /// Returns the cached product, or `None` when absent.
    async fn get(&self, id: ProductId) -> Result<Option<Product>, CacheError>;

    /// Stores `product` under `id`, overwriting any previous entry.
    async fn put(&self, id: ProductId, product: Product) -> Result<(), CacheError>;

    /// Drops the entry for `id`. Absent entries are not an error.
    async fn evict(&self, id: ProductId) -> Result<(), CacheError>;
}

// == In-Memory Product Cache ==
/// Thread-safe product cache with TTL expiry and LRU eviction.
#[derive(Debug, Clone)]
pub struct InMemoryProductCache {
    inner: Arc<RwLock<CacheStore<ProductId, Product>>>,
}

impl InMemoryProductCache {
    /// # Arguments
    /// * `max_entries` - Maximum number of products held at once
    /// * `ttl` - Seconds a cached product stays valid
    pub fn new(max_entries: usize, ttl: u64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CacheStore::new(max_entries, ttl))),
        }
    }

    /// Shared handle to the underlying store, used by the cleanup task.
    pub fn store(&self) -> Arc<RwLock<CacheStore<ProductId, Product>>> {
        self.inner.clone()
    }

    /// Reads an entry without counting a lookup or refreshing LRU order.
    pub async fn peek(&self, id: ProductId) -> Option<Product> {
        self.inner.read().await.peek(&id)
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl ProductCache for InMemoryProductCache {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, CacheError> {
        // Write lock: a lookup updates LRU order and stats
        Ok(self.inner.write().await.get(&id))
    }

    async fn put(&self, id: ProductId, product: Product) -> Result<(), CacheError> {
        self.inner.write().await.set(id, product)
    }

    async fn evict(&self, id: ProductId) -> Result<(), CacheError> {
        self.inner.write().await.remove(&id);
        Ok(())
    }
}
