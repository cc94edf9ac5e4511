//! Product entity and the request/response models of the HTTP API
//!
//! This module defines the domain value plus the DTOs (Data Transfer Objects)
//! used for serializing/deserializing HTTP request and response bodies.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::{NewProduct, Product, ProductId};
pub use requests::ProductRequest;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
