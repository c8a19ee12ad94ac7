//! Cart and wishlist state core
//!
//! A Redux-style store for a food-ordering client:
//!
//! ```text
//! Action → Middleware Chain → Reducer → (State, Effects)
//!                                            │
//!                                            ▼
//!                                      EffectRunner → CartService (HTTP)
//! ```
//!
//! Reducers are pure. Remote notifications come back as [`effects::Effect`]
//! values; the caller hands them to an [`effect_runner::EffectRunner`] which
//! executes them fire-and-forget. Local state is authoritative and never
//! rolled back.
//!
//! # Example
//!
//! ```rust
//! use food_cart::actions::Action;
//! use food_cart::domain_models::Product;
//! use food_cart::state::AppState;
//! use food_cart::store::Store;
//!
//! let mut store = Store::new(AppState::default());
//! let effects = store.dispatch(Action::add_to_cart(Product::new("A", 10.0)));
//!
//! assert_eq!(store.state().cart.subtotal, "10.00");
//! assert_eq!(effects.len(), 1);
//! ```

pub mod actions;
pub mod commands;
pub mod dispatcher;
pub mod domain_models;
pub mod effect_runner;
pub mod effects;
pub mod logger;
pub mod middleware;
pub mod reducer;
pub mod reducers;
pub mod state;
pub mod store;
pub mod view_models;
