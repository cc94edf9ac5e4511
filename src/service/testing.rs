//! Store and cache doubles for service tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::cache::{InMemoryProductCache, ProductCache};
use crate::error::{CacheError, StoreError};
use crate::models::{NewProduct, Product, ProductId};
use crate::store::{InMemoryProductStore, ProductStore};

/// Wraps an in-memory store and counts lookups and saves.
#[derive(Debug, Default)]
pub struct SpyStore {
    inner: InMemoryProductStore,
    find_calls: AtomicUsize,
    save_calls: AtomicUsize,
}

impl SpyStore {
    pub fn new(inner: InMemoryProductStore) -> Self {
        Self {
            inner,
            find_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
        }
    }

    /// The wrapped store; calls made through it are not counted.
    pub fn inner(&self) -> &InMemoryProductStore {
        &self.inner
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.find_calls.store(0, Ordering::SeqCst);
        self.save_calls.store(0, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProductStore for SpyStore {
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        self.inner.insert(product).await
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.save(product).await
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        self.inner.delete_by_id(id).await
    }
}

/// Wraps an in-memory cache and counts reads and writes.
#[derive(Debug)]
pub struct SpyCache {
    inner: InMemoryProductCache,
    get_calls: AtomicUsize,
    put_calls: AtomicUsize,
}

impl SpyCache {
    pub fn new(inner: InMemoryProductCache) -> Self {
        Self {
            inner,
            get_calls: AtomicUsize::new(0),
            put_calls: AtomicUsize::new(0),
        }
    }

    /// The wrapped cache; calls made through it are not counted.
    pub fn inner(&self) -> &InMemoryProductCache {
        &self.inner
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductCache for SpyCache {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, CacheError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get(id).await
    }

    async fn put(&self, id: ProductId, product: Product) -> Result<(), CacheError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.put(id, product).await
    }

    async fn evict(&self, id: ProductId) -> Result<(), CacheError> {
        self.inner.evict(id).await
    }
}

/// A store whose every call fails.
pub struct FailingStore;

fn store_down() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl ProductStore for FailingStore {
    async fn insert(&self, _product: NewProduct) -> Result<Product, StoreError> {
        Err(store_down())
    }

    async fn find_by_id(&self, _id: ProductId) -> Result<Option<Product>, StoreError> {
        Err(store_down())
    }

    async fn save(&self, _product: Product) -> Result<Product, StoreError> {
        Err(store_down())
    }

    async fn delete_by_id(&self, _id: ProductId) -> Result<(), StoreError> {
        Err(store_down())
    }
}

/// A cache whose every call fails.
pub struct FailingCache;

fn cache_down() -> CacheError {
    CacheError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl ProductCache for FailingCache {
    async fn get(&self, _id: ProductId) -> Result<Option<Product>, CacheError> {
        Err(cache_down())
    }

    async fn put(&self, _id: ProductId, _product: Product) -> Result<(), CacheError> {
        Err(cache_down())
    }

    async fn evict(&self, _id: ProductId) -> Result<(), CacheError> {
        Err(cache_down())
    }
}
