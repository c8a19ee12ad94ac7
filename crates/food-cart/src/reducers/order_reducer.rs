//! Order Reducer
//!
//! Handles the promo-code flow of the checkout summary. The discount amount
//! is fixed when a code is accepted: `(cart total + delivery) × percent / 100`.

use crate::actions::OrderAction;
use crate::effects::Effect;
use crate::state::{CartState, OrderState};

/// Reduce order actions. Needs the cart to price a granted discount.
pub fn reduce(
    mut state: OrderState,
    action: &OrderAction,
    cart: &CartState,
) -> (OrderState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        OrderAction::PromocodeApply(code) => {
            if state.has_discount() {
                log::debug!("Order: promo code ignored, discount already applied");
            } else if state.loading {
                log::debug!("Order: promo code lookup already in flight");
            } else {
                state.promocode = code.trim().to_string();
                state.loading = true;
                state.error = None;
                effects.push(Effect::LookupDiscount {
                    promocode: state.promocode.clone(),
                });
            }
        }

        // Lookup results only count while their request is still pending;
        // a reset or clear in between abandons them.
        OrderAction::DiscountLoaded { .. } | OrderAction::PromocodeRejected(_)
            if !state.loading =>
        {
            log::debug!("Order: stale promo code result ignored");
        }

        OrderAction::DiscountLoaded { percent } => {
            state.loading = false;
            if *percent > 0.0 {
                let gross = cart.total_value() + cart.delivery;
                state.discount = gross * percent / 100.0;
                state.discount_percent = Some(*percent);
                state.error = None;
                log::info!(
                    "Order: promo code {} applied, {}% off ({:.2})",
                    state.promocode,
                    percent,
                    state.discount
                );
            } else {
                state.error = Some(format!("Promo code {} grants no discount", state.promocode));
                log::info!("Order: promo code {} grants no discount", state.promocode);
            }
        }

        OrderAction::PromocodeRejected(reason) => {
            state.loading = false;
            state.error = Some(reason.clone());
            log::warn!("Order: promo code {} rejected: {}", state.promocode, reason);
        }

        OrderAction::PromocodeInvalid(reason) => {
            state.error = Some(reason.clone());
            log::debug!("Order: promo code refused: {}", reason);
        }

        OrderAction::PromocodeClear => {
            state = OrderState::default();
        }
    }

    (state, effects)
}
