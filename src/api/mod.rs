//! API Module
//!
//! HTTP handlers and routing for the product REST API.
//!
//! # Endpoints
//! - `POST /api/product` - Create a product
//! - `PUT /api/product` - Update a product
//! - `GET /api/product/:id` - Fetch a product
//! - `DELETE /api/product/:id` - Delete a product
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
