//! Application State

use super::{CartState, OrderState, WishlistState};
use food_cart_config::AppConfig;

/// Application state owned by the [`Store`](crate::store::Store)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub cart: CartState,
    pub wishlist: WishlistState,
    pub order: OrderState,
}

impl AppState {
    /// Fresh session state honouring the configured delivery fee
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            cart: CartState::with_delivery(config.delivery_fee),
            ..Self::default()
        }
    }
}
