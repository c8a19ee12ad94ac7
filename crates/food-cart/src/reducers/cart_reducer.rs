//! Cart Reducer
//!
//! Maintains line items and running totals. Every add/remove keeps
//! `subtotal == Σ price × quantity` (to two decimals) and emits a
//! best-effort notification for the backend.

use crate::actions::CartAction;
use crate::domain_models::{adjust_amount, format_amount, Product};
use crate::effects::{Effect, Operation};
use crate::state::CartState;

/// Reduce cart actions, returning the new state and the effects to run
pub fn reduce(mut state: CartState, action: &CartAction) -> (CartState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        CartAction::Add(product) => {
            match state.list.iter().position(|item| item.id == product.id) {
                Some(idx) => {
                    let quantity = state.list[idx].quantity_or_zero() + 1;
                    state.list[idx].quantity = Some(quantity);
                    log::debug!("Cart: {} quantity -> {}", product.id, quantity);
                }
                None => {
                    state.list.push(Product {
                        quantity: Some(1),
                        ..product.clone()
                    });
                    log::debug!("Cart: added {}", product.id);
                }
            }
            state.total = adjust_amount(&state.total, product.price);
            state.subtotal = adjust_amount(&state.subtotal, product.price);
            effects.push(Effect::notify_cart(&product.id, Operation::Add));
        }

        CartAction::Remove(product) => {
            if let Some(idx) = state.list.iter().position(|item| item.id == product.id) {
                let quantity = state.list[idx].quantity_or_zero();
                if quantity > 1 {
                    state.list[idx].quantity = Some(quantity - 1);
                    log::debug!("Cart: {} quantity -> {}", product.id, quantity - 1);
                } else {
                    state.list.remove(idx);
                    log::debug!("Cart: removed {}", product.id);
                }
                state.total = adjust_amount(&state.total, -product.price);
                state.subtotal = adjust_amount(&state.subtotal, -product.price);
                effects.push(Effect::notify_cart(&product.id, Operation::Delete));
            } else {
                log::debug!("Cart: remove of {} ignored, not in cart", product.id);
            }
        }

        CartAction::FullRemove(product) => {
            // Only `total` moves here; `subtotal` is left as is.
            if let Some(idx) = state.list.iter().position(|item| item.id == product.id) {
                let item = state.list.remove(idx);
                state.total = adjust_amount(&state.total, -item.line_total());
                log::debug!(
                    "Cart: fully removed {} ({} units)",
                    item.id,
                    item.quantity_or_zero()
                );
            }
        }

        CartAction::Reset => {
            state.list.clear();
            state.total = format_amount(0.0);
            state.subtotal = format_amount(0.0);
            state.delivery = state.default_delivery();
            log::info!("Cart reset");
        }
    }

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::ProductId;

    fn product(id: &str, price: f64) -> Product {
        Product::new(id, price)
    }

    fn apply(state: CartState, action: CartAction) -> CartState {
        reduce(state, &action).0
    }

    fn assert_reconciled(state: &CartState) {
        assert_eq!(
            state.subtotal,
            format_amount(state.line_items_total()),
            "subtotal must match line items: {:?}",
            state
        );
    }

    #[test]
    fn test_add_then_remove_scenario() {
        let a = product("A", 10.0);

        let state = apply(CartState::default(), CartAction::Add(a.clone()));
        assert_eq!(state.subtotal, "10.00");
        assert_eq!(state.total, "10.00");
        assert_eq!(state.list.len(), 1);
        assert_eq!(state.list[0].quantity, Some(1));

        let state = apply(state, CartAction::Add(a.clone()));
        assert_eq!(state.list.len(), 1);
        assert_eq!(state.list[0].quantity, Some(2));
        assert_eq!(state.subtotal, "20.00");

        let state = apply(state, CartAction::Remove(a.clone()));
        assert_eq!(state.list[0].quantity, Some(1));
        assert_eq!(state.subtotal, "10.00");

        let state = apply(state, CartAction::Remove(a));
        assert!(state.list.is_empty());
        assert_eq!(state.subtotal, "0.00");
        assert_eq!(state.total, "0.00");
    }

    #[test]
    fn test_add_emits_add_notification() {
        let (_, effects) = reduce(CartState::default(), &CartAction::Add(product("A", 1.0)));
        assert_eq!(
            effects,
            vec![Effect::NotifyCart {
                product_id: ProductId::from("A"),
                operation: Operation::Add,
            }]
        );
    }

    #[test]
    fn test_remove_emits_delete_notification() {
        let state = apply(CartState::default(), CartAction::Add(product("A", 1.0)));
        let (_, effects) = reduce(state, &CartAction::Remove(product("A", 1.0)));
        assert_eq!(
            effects,
            vec![Effect::notify_cart(&ProductId::from("A"), Operation::Delete)]
        );
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let state = apply(CartState::default(), CartAction::Add(product("A", 3.0)));
        let before = state.clone();

        let (after, effects) = reduce(state, &CartAction::Remove(product("B", 5.0)));
        assert_eq!(after, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_add_remove_round_trip() {
        let mut state = CartState::default();
        state = apply(state, CartAction::Add(product("X", 4.25)));
        state = apply(state, CartAction::Add(product("Y", 0.99)));
        let before = state.clone();

        let fresh = product("Z", 12.34);
        state = apply(state, CartAction::Add(fresh.clone()));
        state = apply(state, CartAction::Remove(fresh));
        assert_eq!(state, before);

        // also holds for an item already present with quantity 1
        let existing = product("X", 4.25);
        state = apply(state, CartAction::Add(existing.clone()));
        state = apply(state, CartAction::Remove(existing));
        assert_eq!(state, before);
    }

    #[test]
    fn test_entries_stay_unique_and_ordered() {
        let mut state = CartState::default();
        for id in ["A", "B", "A", "C", "B", "A"] {
            state = apply(state, CartAction::Add(product(id, 1.0)));
        }
        let ids: Vec<&str> = state.list.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(state.item(&ProductId::from("A")).unwrap().quantity, Some(3));
        assert_eq!(state.unit_count(), 6);
        assert_reconciled(&state);
    }

    #[test]
    fn test_full_remove_adjusts_total_only() {
        let mut state = CartState::default();
        state = apply(state, CartAction::Add(product("A", 2.5)));
        state = apply(state, CartAction::Add(product("A", 2.5)));
        state = apply(state, CartAction::Add(product("B", 1.0)));

        let (state, effects) = reduce(state, &CartAction::FullRemove(product("A", 2.5)));
        assert!(effects.is_empty());
        assert!(!state.contains(&ProductId::from("A")));
        assert_eq!(state.total, "1.00");
        // subtotal keeps the removed contribution
        assert_eq!(state.subtotal, "6.00");
    }

    #[test]
    fn test_full_remove_missing_is_noop() {
        let state = apply(CartState::default(), CartAction::Add(product("A", 2.0)));
        let before = state.clone();
        let after = apply(state, CartAction::FullRemove(product("Q", 2.0)));
        assert_eq!(after, before);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut state = CartState::default();
        state = apply(state, CartAction::Add(product("A", 7.0)));
        state = apply(state, CartAction::Add(product("B", 3.0)));
        state = apply(state, CartAction::FullRemove(product("A", 7.0)));
        state.delivery = 9.0;

        let (state, effects) = reduce(state, &CartAction::Reset);
        assert!(effects.is_empty());
        assert!(state.list.is_empty());
        assert_eq!(state.subtotal, "0.00");
        assert_eq!(state.total, "0.00");
        assert_eq!(state.delivery, 2.0);
    }

    #[test]
    fn test_reset_restores_configured_delivery() {
        let mut state = CartState::with_delivery(3.5);
        state.delivery = 0.0;
        let state = apply(state, CartAction::Reset);
        assert_eq!(state.delivery, 3.5);
    }

    #[test]
    fn test_subtotal_reconciles_over_long_sequence() {
        let prices = [0.1, 0.2, 0.3, 1.99, 4.45, 12.05, 0.01, 7.77];
        let mut state = CartState::default();

        // deterministic pseudo-random walk over adds and removes
        let mut seed: u32 = 17;
        for _ in 0..5_000 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let idx = (seed >> 16) as usize % prices.len();
            let item = product(&format!("P{}", idx), prices[idx]);
            let action = if (seed >> 8) % 3 == 0 {
                CartAction::Remove(item)
            } else {
                CartAction::Add(item)
            };
            state = apply(state, action);

            let drift = (state.subtotal_value() - state.line_items_total()).abs();
            assert!(drift < 0.01, "drift {} after {:?}", drift, state);
        }
        assert_reconciled(&state);
        assert_eq!(state.subtotal, state.total);
    }
}
