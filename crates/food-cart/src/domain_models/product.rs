//! Product model
//!
//! Products are owned by the catalog; the cart and wishlist only reference
//! them by id and carry a copy of the fields they need.

use serde::{Deserialize, Serialize};

/// Newtype wrapper for catalog product ids, stable across mutations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog product, optionally carrying a cart quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit price, non-negative
    pub price: f64,
    /// Present only once the product sits in the cart
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            price,
            quantity: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Quantity held in the cart, zero when the product is not a line item
    pub fn quantity_or_zero(&self) -> u32 {
        self.quantity.unwrap_or(0)
    }

    /// Contribution of this line item to the cart totals
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity_or_zero())
    }

    /// Human readable label (name if known, id otherwise)
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.id.as_str())
    }
}
