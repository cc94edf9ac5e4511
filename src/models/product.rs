//! Product entity
//!
//! The single resource managed by the service. Values are cloned across
//! every boundary so cached and stored copies never share state.

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{Deserialize, Serialize, Serializer};

/// Identifier assigned by the store on creation.
pub type ProductId = i64;

// == Product ==
/// A stored product, including its assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: BigDecimal,
}

/// Writes a price as a JSON number. Whole prices are written without a
/// fractional part; input still accepts either a number or a string.
fn serialize_price<S: Serializer>(price: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    let whole = price.with_scale(0);
    if whole == *price {
        if let Some(n) = whole.to_i64() {
            return serializer.serialize_i64(n);
        }
    }
    match price.to_f64() {
        Some(n) if n.is_finite() => serializer.serialize_f64(n),
        _ => serializer.collect_str(price),
    }
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: BigDecimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

// == New Product ==
/// A product that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: BigDecimal,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: BigDecimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Attaches a store-assigned id.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}
