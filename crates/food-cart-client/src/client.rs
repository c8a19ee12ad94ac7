//! Remote cart service trait
//!
//! This module defines the `CartService` port the store's effect runner
//! talks to. Implementations can be direct (hitting the backend over HTTP)
//! or test doubles recording what would have been sent.

use crate::error::ServiceError;
use crate::types::{CartNotification, NotifyResponse, WishlistNotification};
use async_trait::async_trait;

/// Remote cart/wishlist service
///
/// Notifications are best effort: callers log the outcome and never
/// roll back local state on failure.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared across
/// spawned tasks.
///
/// # Example
///
/// ```rust,ignore
/// use food_cart_client::{CartService, CartNotification, Operation};
///
/// async fn mirror_add(service: &dyn CartService, product_id: &str) {
///     let body = CartNotification {
///         user_id: "634501".to_string(),
///         cart_product: product_id.to_string(),
///         operation: Operation::Add,
///     };
///     if let Err(e) = service.notify_cart(&body).await {
///         log::warn!("cart notify failed: {}", e);
///     }
/// }
/// ```
#[async_trait]
pub trait CartService: Send + Sync {
    /// Mirror a cart mutation to the backend
    async fn notify_cart(
        &self,
        notification: &CartNotification,
    ) -> Result<NotifyResponse, ServiceError>;

    /// Mirror a wishlist mutation to the backend
    async fn notify_wishlist(
        &self,
        notification: &WishlistNotification,
    ) -> Result<NotifyResponse, ServiceError>;

    /// Look up a promo code
    ///
    /// # Returns
    ///
    /// The discount in percent, or an error if the code is unknown or the
    /// backend could not be reached.
    async fn lookup_discount(&self, promocode: &str) -> Result<f64, ServiceError>;
}
