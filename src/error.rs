//! Error types for the product service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ErrorResponse, ProductId};

// == Product Error Enum ==
/// Errors surfaced by the product service to the API layer.
#[derive(Error, Debug)]
pub enum ProductError {
    /// Malformed product input (blank name, non-positive price, missing id)
    #[error("Invalid request: {0}")]
    Validation(String),

    /// No stored product with this id
    #[error("No Product with id {0} found.")]
    NotFound(ProductId),

    /// The backing store failed
    #[error("Store failure: {0}")]
    Store(#[from] StoreError),
}

// == Store Error Enum ==
/// Failures raised by a product store implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The id sequence has no values left
    #[error("product id sequence exhausted")]
    IdsExhausted,

    /// The store could not be reached or refused the operation
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

// == Cache Error Enum ==
/// Failures raised by a product cache implementation.
///
/// These never reach the API layer; the service logs and drops them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Cache is full and eviction failed
    #[error("Cache full: {0}")]
    CacheFull(String),

    /// The cache could not be reached or refused the operation
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProductError::Validation(_) => StatusCode::BAD_REQUEST,
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            ProductError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for product service operations.
pub type Result<T> = std::result::Result<T, ProductError>;
