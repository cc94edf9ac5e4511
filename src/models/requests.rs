//! Request DTOs for the product API
//!
//! Defines the structure of incoming HTTP request bodies.

use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::error::ProductError;
use crate::models::{NewProduct, Product, ProductId};

/// Request body for create (POST /api/product) and update (PUT /api/product)
///
/// # Fields
/// - `id`: Ignored on create, required on update
/// - `name`: Must not be blank
/// - `price`: Must be greater than zero; accepted as JSON string or number
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: String,
    pub price: BigDecimal,
}

impl ProductRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be blank".to_string());
        }
        if self.price <= BigDecimal::from(0) {
            return Some("Price must be greater than zero".to_string());
        }
        None
    }

    /// Validates and converts into a product to be created.
    pub fn into_new_product(self) -> Result<NewProduct, ProductError> {
        if let Some(msg) = self.validate() {
            return Err(ProductError::Validation(msg));
        }
        Ok(NewProduct::new(self.name, self.price))
    }

    /// Validates and converts into a replacement for an existing product.
    pub fn into_product(self) -> Result<Product, ProductError> {
        if let Some(msg) = self.validate() {
            return Err(ProductError::Validation(msg));
        }
        let id = self
            .id
            .ok_or_else(|| ProductError::Validation("Id is required for update".to_string()))?;
        Ok(Product::new(id, self.name, self.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: Option<ProductId>, name: &str, price: i64) -> ProductRequest {
        ProductRequest {
            id,
            name: name.to_string(),
            price: BigDecimal::from(price),
        }
    }

    #[test]
    fn test_deserialize_numeric_price() {
        let json = r#"{"name": "Laptop", "price": 1200}"#;
        let req: ProductRequest = serde_json::from_str(json).unwrap();
        assert!(req.id.is_none());
        assert_eq!(req.name, "Laptop");
        assert_eq!(req.price, BigDecimal::from(1200));
    }

    #[test]
    fn test_deserialize_string_price_with_id() {
        let json = r#"{"id": 4, "name": "Tablet", "price": "550.50"}"#;
        let req: ProductRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.id, Some(4));
        assert_eq!(req.price, "550.5".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn test_validate_blank_name() {
        assert!(request(None, "", 10).validate().is_some());
        assert!(request(None, "   ", 10).validate().is_some());
    }

    #[test]
    fn test_validate_non_positive_price() {
        assert!(request(None, "Laptop", 0).validate().is_some());
        assert!(request(None, "Laptop", -5).validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(request(None, "Laptop", 1200).validate().is_none());
    }

    #[test]
    fn test_into_product_requires_id() {
        let result = request(None, "Laptop", 1200).into_product();
        assert!(matches!(result, Err(ProductError::Validation(_))));

        let product = request(Some(9), "Laptop", 1200).into_product().unwrap();
        assert_eq!(product.id, 9);
    }

    #[test]
    fn test_into_new_product_drops_id() {
        let new = request(Some(9), "Laptop", 1200).into_new_product().unwrap();
        assert_eq!(new, NewProduct::new("Laptop", BigDecimal::from(1200)));
    }
}
