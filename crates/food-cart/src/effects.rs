//! Effect descriptions
//!
//! Reducers never talk to the network. They return effects as data next to
//! the new state; the caller decides when and where to execute them (see
//! [`EffectRunner`](crate::effect_runner::EffectRunner)).

use crate::domain_models::ProductId;
pub use food_cart_client::Operation;

/// A side effect requested by a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Mirror a cart mutation to the backend (best effort)
    NotifyCart {
        product_id: ProductId,
        operation: Operation,
    },
    /// Mirror a wishlist mutation to the backend (best effort)
    NotifyWishlist {
        product_id: ProductId,
        operation: Operation,
    },
    /// Resolve a promo code into a discount percentage
    LookupDiscount { promocode: String },
}

impl Effect {
    pub fn notify_cart(product_id: &ProductId, operation: Operation) -> Self {
        Effect::NotifyCart {
            product_id: product_id.clone(),
            operation,
        }
    }

    pub fn notify_wishlist(product_id: &ProductId, operation: Operation) -> Self {
        Effect::NotifyWishlist {
            product_id: product_id.clone(),
            operation,
        }
    }
}
