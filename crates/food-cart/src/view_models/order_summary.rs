//! Order Summary View Model
//!
//! Pre-computes the read-only totals the checkout screen shows.

use crate::domain_models::format_amount;
use crate::state::AppState;

/// View model for the order summary block
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummaryViewModel {
    pub item_count: u32,
    pub subtotal: String,
    pub delivery: String,
    /// Discount amount, "0.00" when no code is applied
    pub discount: String,
    /// Cart total + delivery - discount
    pub total: String,
    pub promocode_applied: bool,
    pub promocode_loading: bool,
    pub promocode_error: Option<String>,
}

impl OrderSummaryViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let cart = &state.cart;
        let order = &state.order;
        let total = cart.total_value() + cart.delivery - order.discount;

        Self {
            item_count: cart.unit_count(),
            subtotal: cart.subtotal.clone(),
            delivery: format_amount(cart.delivery),
            discount: format_amount(order.discount),
            total: format_amount(total),
            promocode_applied: order.has_discount(),
            promocode_loading: order.loading,
            promocode_error: order.error.clone(),
        }
    }
}

impl std::fmt::Display for OrderSummaryViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Items     {}", self.item_count)?;
        writeln!(f, "Subtotal  ${}", self.subtotal)?;
        if self.promocode_applied {
            writeln!(f, "Discount  -${}", self.discount)?;
        }
        writeln!(f, "Delivery  ${}", self.delivery)?;
        write!(f, "Total     ${}", self.total)?;
        if self.promocode_loading {
            write!(f, "\n(checking promo code...)")?;
        }
        if let Some(error) = &self.promocode_error {
            write!(f, "\n(promo code: {})", error)?;
        }
        Ok(())
    }
}
