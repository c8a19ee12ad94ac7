//! Promo Code Middleware
//!
//! Keeps obviously unusable promo codes away from the backend: a blank code
//! is consumed here and answered with a rejection.

use crate::actions::{Action, OrderAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct PromocodeMiddleware;

impl PromocodeMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PromocodeMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for PromocodeMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Order(OrderAction::PromocodeApply(code)) if code.trim().is_empty() => {
                log::debug!("PromocodeMiddleware: blank promo code consumed");
                dispatcher.dispatch(Action::Order(OrderAction::PromocodeInvalid(
                    "Enter a promo code".to_string(),
                )));
                false
            }
            Action::Order(OrderAction::PromocodeApply(_)) if state.cart.is_empty() => {
                log::debug!("PromocodeMiddleware: cart is empty, nothing to discount");
                dispatcher.dispatch(Action::Order(OrderAction::PromocodeInvalid(
                    "Add something to the cart first".to_string(),
                )));
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Product;
    use crate::reducer::reduce;
    use std::sync::mpsc;

    fn non_empty_state() -> AppState {
        reduce(AppState::default(), &Action::add_to_cart(Product::new("A", 5.0))).0
    }

    #[test]
    fn test_blank_code_is_consumed_and_rejected() {
        let mut middleware = PromocodeMiddleware::new();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let should_continue = middleware.handle(
            &Action::Order(OrderAction::PromocodeApply("   ".to_string())),
            &non_empty_state(),
            &dispatcher,
        );

        assert!(!should_continue);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Order(OrderAction::PromocodeInvalid(_)))
        ));
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let mut middleware = PromocodeMiddleware::new();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let should_continue = middleware.handle(
            &Action::Order(OrderAction::PromocodeApply("SAVE10".to_string())),
            &AppState::default(),
            &dispatcher,
        );

        assert!(!should_continue);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_valid_code_passes_through() {
        let mut middleware = PromocodeMiddleware::new();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let should_continue = middleware.handle(
            &Action::Order(OrderAction::PromocodeApply("SAVE10".to_string())),
            &non_empty_state(),
            &dispatcher,
        );

        assert!(should_continue);
        assert!(rx.try_recv().is_err());
    }
}
