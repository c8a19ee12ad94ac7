//! Cart State

use crate::domain_models::{format_amount, parse_amount, Product, ProductId};

/// Delivery fee of a fresh cart
pub const DEFAULT_DELIVERY: f64 = 2.0;

/// Line items plus running totals
///
/// Only the cart reducer mutates this; everybody else reads snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct CartState {
    /// Ordered line items, unique by id, each with quantity >= 1
    pub list: Vec<Product>,
    /// Sum of price x quantity over `list`, two decimals
    pub subtotal: String,
    /// Equals `subtotal` unless a full remove moved it
    pub total: String,
    pub delivery: f64,
    /// Fee restored by a reset
    default_delivery: f64,
}

impl CartState {
    /// Empty cart with a custom delivery fee
    pub fn with_delivery(delivery: f64) -> Self {
        Self {
            list: Vec::new(),
            subtotal: format_amount(0.0),
            total: format_amount(0.0),
            delivery,
            default_delivery: delivery,
        }
    }

    /// Fee a reset restores
    pub fn default_delivery(&self) -> f64 {
        self.default_delivery
    }

    /// The line item for `id`, if present
    pub fn item(&self, id: &ProductId) -> Option<&Product> {
        self.list.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.item(id).is_some()
    }

    /// Number of units across all line items
    pub fn unit_count(&self) -> u32 {
        self.list.iter().map(Product::quantity_or_zero).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn subtotal_value(&self) -> f64 {
        parse_amount(&self.subtotal)
    }

    pub fn total_value(&self) -> f64 {
        parse_amount(&self.total)
    }

    /// Subtotal recomputed from the line items
    pub fn line_items_total(&self) -> f64 {
        self.list.iter().map(Product::line_total).sum()
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::with_delivery(DEFAULT_DELIVERY)
    }
}
