//! Service Module
//!
//! The product service and its cache-consistency policy.

mod product_service;

#[cfg(test)]
mod testing;

pub use product_service::ProductService;
