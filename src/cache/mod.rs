//! Cache Module
//!
//! In-memory product caching with TTL expiration and LRU eviction.

mod entry;
mod lru;
mod product_cache;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use product_cache::{InMemoryProductCache, ProductCache};
pub use stats::CacheStats;
pub use store::CacheStore;
