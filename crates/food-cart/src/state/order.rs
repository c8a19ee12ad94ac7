//! Order State
//!
//! Promo-code input and the discount merged into the shown total.

/// Discount bookkeeping for the checkout summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderState {
    /// Last promo code submitted
    pub promocode: String,
    /// A lookup is in flight
    pub loading: bool,
    /// Discount amount fixed when the code was accepted
    pub discount: f64,
    /// Percentage the backend granted, kept for display
    pub discount_percent: Option<f64>,
    /// Why the last code was not applied
    pub error: Option<String>,
}

impl OrderState {
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }
}
