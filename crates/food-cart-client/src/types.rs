//! Wire types for the cart/wishlist backend
//!
//! These types mirror the JSON bodies exchanged with the remote service.
//! They are intentionally separate from the store's domain models.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Mutation tag sent with every notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Add,
    Delete,
}

/// Body of a cart notification (`POST /api/cart`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartNotification {
    pub user_id: String,
    pub cart_product: String,
    pub operation: Operation,
}

/// Body of a wishlist notification (`POST /api/wishlist`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistNotification {
    pub user_id: String,
    #[serde(rename = "wishListProduct")]
    pub wishlist_product: String,
    pub operation: Operation,
}

/// What the backend answered to a notification
///
/// The store never acts on this; it is only logged.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyResponse {
    pub status: u16,
    /// Decoded JSON body, `Null` when the body was empty
    pub body: serde_json::Value,
}

/// Response of the promo-code lookup (`GET /api/discount?promocode=..`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountResponse {
    pub promocode: PromocodeDiscount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromocodeDiscount {
    /// Discount in percent of the gross order total
    pub discount: f64,
}
