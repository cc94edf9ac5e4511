//! Store Module
//!
//! The durable record of every product. The service treats the store as the
//! operation of record; the cache only ever mirrors what the store confirmed.

mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{NewProduct, Product, ProductId};

pub use memory::InMemoryProductStore;

/// Persistence capabilities required by the product service.
///
/// Each call succeeds or fails atomically.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persists a new row and returns it with its assigned id.
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Inserts or fully replaces the row keyed by `product.id`.
    async fn save(&self, product: Product) -> Result<Product, StoreError>;

    /// Removes the row for `id`. Deleting an absent row is not an error.
    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError>;
}
