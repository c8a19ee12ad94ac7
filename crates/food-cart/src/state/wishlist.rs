//! Wishlist State

use crate::domain_models::{Product, ProductId};

/// Saved-for-later products, unique by id, no quantities
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistState {
    pub list: Vec<Product>,
}

impl WishlistState {
    pub fn contains(&self, id: &ProductId) -> bool {
        self.list.iter().any(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
