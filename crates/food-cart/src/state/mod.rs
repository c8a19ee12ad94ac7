mod app;
mod cart;
mod order;
mod wishlist;

pub use app::AppState;
pub use cart::{CartState, DEFAULT_DELIVERY};
pub use order::OrderState;
pub use wishlist::WishlistState;
