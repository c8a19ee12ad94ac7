use crate::domain_models::Product;

/// Actions represent all possible state changes in the application.
/// Actions are grouped by the slice of state they affect.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Cart(CartAction),
    Wishlist(WishlistAction),
    Order(OrderAction),
}

/// ## Cart actions
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit of the product
    Add(Product),
    /// Remove one unit of the product
    Remove(Product),
    /// Drop the whole line item (adjusts `total` only)
    FullRemove(Product),
    /// Empty the cart and restore the delivery fee
    Reset,
}

/// ## Wishlist actions
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    Add(Product),
    Remove(Product),
}

/// ## Order / checkout actions
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// User submitted a promo code
    PromocodeApply(String),
    /// Backend granted a discount in percent (dispatched by the effect runner)
    DiscountLoaded { percent: f64 },
    /// Lookup failed (dispatched by the effect runner)
    PromocodeRejected(String),
    /// Code refused locally before any lookup (dispatched by middleware)
    PromocodeInvalid(String),
    /// Forget the promo code and its discount
    PromocodeClear,
}

impl Action {
    pub fn add_to_cart(product: Product) -> Self {
        Action::Cart(CartAction::Add(product))
    }

    pub fn remove_from_cart(product: Product) -> Self {
        Action::Cart(CartAction::Remove(product))
    }

    pub fn full_remove_from_cart(product: Product) -> Self {
        Action::Cart(CartAction::FullRemove(product))
    }

    pub fn reset_cart() -> Self {
        Action::Cart(CartAction::Reset)
    }

    pub fn add_to_wishlist(product: Product) -> Self {
        Action::Wishlist(WishlistAction::Add(product))
    }

    pub fn remove_from_wishlist(product: Product) -> Self {
        Action::Wishlist(WishlistAction::Remove(product))
    }
}
