//! Effect runner
//!
//! Executes effect descriptions emitted by the store on a tokio runtime:
//! - Main thread handles input and store mutations only
//! - Notifications run as detached tasks, their outcome is only logged
//! - Discount lookups report back through the Dispatcher
//!
//! Nothing here retries, times out (beyond the client's own setting) or rolls
//! back local state. The local state stays authoritative.

use crate::actions::{Action, OrderAction};
use crate::dispatcher::Dispatcher;
use crate::effects::Effect;
use food_cart_client::{CartNotification, CartService, WishlistNotification};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Spawns one task per effect against the injected [`CartService`]
pub struct EffectRunner {
    runtime: Handle,
    service: Arc<dyn CartService>,
    user_id: String,
    dispatcher: Dispatcher,
}

impl EffectRunner {
    pub fn new(
        runtime: Handle,
        service: Arc<dyn CartService>,
        user_id: impl Into<String>,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            runtime,
            service,
            user_id: user_id.into(),
            dispatcher,
        }
    }

    /// Spawn all effects. Callers may drop the handles (fire-and-forget).
    pub fn run_all(&self, effects: Vec<Effect>) -> Vec<JoinHandle<()>> {
        effects.into_iter().map(|effect| self.run(effect)).collect()
    }

    /// Spawn a single effect
    pub fn run(&self, effect: Effect) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);

        match effect {
            Effect::NotifyCart {
                product_id,
                operation,
            } => {
                let notification = CartNotification {
                    user_id: self.user_id.clone(),
                    cart_product: product_id.to_string(),
                    operation,
                };
                self.runtime.spawn(async move {
                    match service.notify_cart(&notification).await {
                        Ok(response) => log::debug!(
                            "Cart notify {} {} -> {} {}",
                            notification.operation,
                            notification.cart_product,
                            response.status,
                            response.body
                        ),
                        Err(e) => log::warn!(
                            "Cart notify {} {} failed: {}",
                            notification.operation,
                            notification.cart_product,
                            e
                        ),
                    }
                })
            }

            Effect::NotifyWishlist {
                product_id,
                operation,
            } => {
                let notification = WishlistNotification {
                    user_id: self.user_id.clone(),
                    wishlist_product: product_id.to_string(),
                    operation,
                };
                self.runtime.spawn(async move {
                    match service.notify_wishlist(&notification).await {
                        Ok(response) => log::debug!(
                            "Wishlist notify {} {} -> {} {}",
                            notification.operation,
                            notification.wishlist_product,
                            response.status,
                            response.body
                        ),
                        Err(e) => log::warn!(
                            "Wishlist notify {} {} failed: {}",
                            notification.operation,
                            notification.wishlist_product,
                            e
                        ),
                    }
                })
            }

            Effect::LookupDiscount { promocode } => {
                let dispatcher = self.dispatcher.clone();
                self.runtime.spawn(async move {
                    let action = match service.lookup_discount(&promocode).await {
                        Ok(percent) => OrderAction::DiscountLoaded { percent },
                        Err(e) => {
                            log::warn!("Discount lookup for {} failed: {}", promocode, e);
                            OrderAction::PromocodeRejected(format!("Promo code not accepted: {}", e))
                        }
                    };
                    dispatcher.dispatch(Action::Order(action));
                })
            }
        }
    }
}
