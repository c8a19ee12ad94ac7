use crate::actions::{Action, CartAction};
use crate::effects::Effect;
use crate::reducers::{cart_reducer, order_reducer, wishlist_reducer};
use crate::state::{AppState, OrderState};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes to the slice reducers and collects
/// the effects they request.
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let effects = match action {
        Action::Cart(cart_action) => {
            let (cart, effects) = cart_reducer::reduce(state.cart, cart_action);
            state.cart = cart;
            if matches!(cart_action, CartAction::Reset) {
                // a new order starts from scratch
                state.order = OrderState::default();
            }
            effects
        }
        Action::Wishlist(wishlist_action) => {
            let (wishlist, effects) = wishlist_reducer::reduce(state.wishlist, wishlist_action);
            state.wishlist = wishlist;
            effects
        }
        Action::Order(order_action) => {
            let (order, effects) = order_reducer::reduce(state.order, order_action, &state.cart);
            state.order = order;
            effects
        }
    };

    (state, effects)
}
