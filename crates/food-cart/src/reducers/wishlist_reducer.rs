//! Wishlist Reducer

use crate::actions::WishlistAction;
use crate::effects::{Effect, Operation};
use crate::state::WishlistState;

/// Reduce wishlist actions, returning the new state and the effects to run
pub fn reduce(mut state: WishlistState, action: &WishlistAction) -> (WishlistState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        WishlistAction::Add(product) => {
            if state.contains(&product.id) {
                log::debug!("Wishlist: {} already saved", product.id);
            } else {
                state.list.push(product.clone());
                effects.push(Effect::notify_wishlist(&product.id, Operation::Add));
                log::debug!("Wishlist: saved {}", product.id);
            }
        }

        WishlistAction::Remove(product) => {
            if state.contains(&product.id) {
                state.list.retain(|item| item.id != product.id);
                log::debug!("Wishlist: removed {}", product.id);
            }
            // The backend hears about every delete, present or not.
            effects.push(Effect::notify_wishlist(&product.id, Operation::Delete));
        }
    }

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{Product, ProductId};

    #[test]
    fn test_add_is_idempotent() {
        let item = Product::new("A", 5.0);

        let (state, first) = reduce(WishlistState::default(), &WishlistAction::Add(item.clone()));
        let (state, second) = reduce(state, &WishlistAction::Add(item));

        assert_eq!(state.len(), 1);
        assert_eq!(
            first,
            vec![Effect::notify_wishlist(&ProductId::from("A"), Operation::Add)]
        );
        assert!(second.is_empty());
    }

    #[test]
    fn test_remove_present_item() {
        let (state, _) = reduce(
            WishlistState::default(),
            &WishlistAction::Add(Product::new("A", 5.0)),
        );
        let (state, _) = reduce(state, &WishlistAction::Add(Product::new("B", 6.0)));

        let (state, effects) = reduce(state, &WishlistAction::Remove(Product::new("A", 5.0)));
        assert!(!state.contains(&ProductId::from("A")));
        assert!(state.contains(&ProductId::from("B")));
        assert_eq!(
            effects,
            vec![Effect::notify_wishlist(&ProductId::from("A"), Operation::Delete)]
        );
    }

    #[test]
    fn test_remove_absent_still_notifies() {
        let (state, _) = reduce(
            WishlistState::default(),
            &WishlistAction::Add(Product::new("A", 5.0)),
        );
        let before = state.clone();

        let (state, effects) = reduce(state, &WishlistAction::Remove(Product::new("Z", 1.0)));
        assert_eq!(state, before);
        assert_eq!(
            effects,
            vec![Effect::notify_wishlist(&ProductId::from("Z"), Operation::Delete)]
        );
    }

    #[test]
    fn test_membership_follows_history() {
        let mut state = WishlistState::default();
        let steps = [
            WishlistAction::Add(Product::new("A", 1.0)),
            WishlistAction::Add(Product::new("B", 1.0)),
            WishlistAction::Remove(Product::new("A", 1.0)),
            WishlistAction::Add(Product::new("A", 1.0)),
            WishlistAction::Remove(Product::new("B", 1.0)),
        ];
        for step in &steps {
            state = reduce(state, step).0;
        }
        let ids: Vec<&str> = state.list.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A"]);
    }
}
