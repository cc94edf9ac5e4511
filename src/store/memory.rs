use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::ProductStore;
use crate::error::StoreError;
use crate::models::{NewProduct, Product, ProductId};

#[derive(Debug)]
struct Rows {
    products: HashMap<ProductId, Product>,
    /// Next id to hand out; ids are never reused
    next_id: ProductId,
}

/// In-memory product store with an auto-incrementing id sequence.
///
/// Ids start at 1 and keep increasing across deletions.
#[derive(Debug)]
pub struct InMemoryProductStore {
    rows: RwLock<Rows>,
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose first assigned id is `first_id`.
    pub fn starting_at(first_id: ProductId) -> Self {
        Self {
            rows: RwLock::new(Rows {
                products: HashMap::new(),
                next_id: first_id,
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.products.is_empty()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let mut rows = self.rows.write().await;

        let id = rows.next_id;
        rows.next_id = id.checked_add(1).ok_or(StoreError::IdsExhausted)?;

        let stored = product.with_id(id);
        rows.products.insert(id, stored.clone());
        debug!(id, "inserted product row");
        Ok(stored)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.rows.read().await.products.get(&id).cloned())
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        let mut rows = self.rows.write().await;

        // Keep the sequence ahead of explicitly keyed rows
        if product.id >= rows.next_id {
            rows.next_id = product.id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        }

        rows.products.insert(product.id, product.clone());
        debug!(id = product.id, "saved product row");
        Ok(product)
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        let removed = self.rows.write().await.products.remove(&id).is_some();
        debug!(id, removed, "deleted product row");
        Ok(())
    }
}
