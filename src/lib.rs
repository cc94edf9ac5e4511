//! Product Cache - a product CRUD service with a write-through cache
//!
//! Every product read and write goes through [`service::ProductService`],
//! which keeps an in-memory TTL/LRU cache consistent with the product store.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::ProductService;
pub use tasks::spawn_cleanup_task;
