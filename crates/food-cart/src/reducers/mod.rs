pub mod cart_reducer;
pub mod order_reducer;
pub mod wishlist_reducer;
