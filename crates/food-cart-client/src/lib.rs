//! Remote cart/wishlist service client
//!
//! This crate provides a trait-based client for the backend that mirrors
//! cart and wishlist mutations, plus the promo-code lookup.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              CartService trait              │
//! │  - notify_cart()                            │
//! │  - notify_wishlist()                        │
//! │  - lookup_discount()                        │
//! └─────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌──────────────────┐
//!              │ HttpCartService  │
//!              │ (reqwest)        │
//!              └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use food_cart_client::{CartNotification, CartService, HttpCartService, Operation};
//! use food_cart_config::AppConfig;
//!
//! # async fn example() -> Result<(), food_cart_client::ServiceError> {
//! let service = HttpCartService::from_config(&AppConfig::default())?;
//! let response = service
//!     .notify_cart(&CartNotification {
//!         user_id: "634501".to_string(),
//!         cart_product: "A".to_string(),
//!         operation: Operation::Add,
//!     })
//!     .await?;
//! log::debug!("backend answered {}", response.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::CartService;
pub use error::ServiceError;
pub use http_client::HttpCartService;
pub use types::{
    CartNotification, DiscountResponse, NotifyResponse, Operation, PromocodeDiscount,
    WishlistNotification,
};
