//! Session commands
//!
//! Parses one line of user input into either an action for the store or a
//! read-only query. Removal commands look the product up in the current
//! state, so the user only has to name the id.

use crate::actions::{Action, OrderAction};
use crate::domain_models::{Product, ProductId};
use crate::state::AppState;
use anyhow::{bail, Context, Result};

/// Help text shown by the `help` command
pub const HELP: &str = "\
commands:
  add <id> <price> [name]   add one unit to the cart
  remove <id>               remove one unit from the cart
  full-remove <id>          drop the whole line item
  reset                     empty the cart
  wish <id> <price> [name]  save to the wishlist
  unwish <id>               remove from the wishlist
  promo <code>              apply a promo code
  promo-clear               forget the promo code
  cart | wishlist | summary show state
  help | quit";

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Action),
    ShowCart,
    ShowWishlist,
    ShowSummary,
    Help,
    Quit,
}

/// Parse a line of input against the current state
pub fn parse(line: &str, state: &AppState) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        bail!("empty command");
    };
    let args: Vec<&str> = parts.collect();

    let command = match verb {
        "add" => Command::Dispatch(Action::add_to_cart(product_arg(&args)?)),
        "remove" => Command::Dispatch(Action::remove_from_cart(cart_lookup(&args, state)?)),
        "full-remove" => {
            Command::Dispatch(Action::full_remove_from_cart(cart_lookup(&args, state)?))
        }
        "reset" => Command::Dispatch(Action::reset_cart()),
        "wish" => Command::Dispatch(Action::add_to_wishlist(product_arg(&args)?)),
        "unwish" => Command::Dispatch(Action::remove_from_wishlist(wishlist_lookup(
            &args, state,
        )?)),
        "promo" => Command::Dispatch(Action::Order(OrderAction::PromocodeApply(args.join(" ")))),
        "promo-clear" => Command::Dispatch(Action::Order(OrderAction::PromocodeClear)),
        "cart" => Command::ShowCart,
        "wishlist" => Command::ShowWishlist,
        "summary" => Command::ShowSummary,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command '{}', try 'help'", other),
    };
    Ok(command)
}

fn id_arg(args: &[&str]) -> Result<ProductId> {
    args.first()
        .map(|id| ProductId::from(*id))
        .context("missing product id")
}

fn product_arg(args: &[&str]) -> Result<Product> {
    let id = id_arg(args)?;
    let raw_price = args.get(1).context("missing price")?;
    let price: f64 = raw_price
        .parse()
        .with_context(|| format!("invalid price '{}'", raw_price))?;
    if !price.is_finite() || price < 0.0 {
        bail!("price must be a non-negative amount");
    }

    let mut product = Product::new(id, price);
    if args.len() > 2 {
        product = product.with_name(args[2..].join(" "));
    }
    Ok(product)
}

/// The cart's copy of the product, or a zero-priced stand-in the reducer
/// will ignore.
fn cart_lookup(args: &[&str], state: &AppState) -> Result<Product> {
    let id = id_arg(args)?;
    Ok(state
        .cart
        .item(&id)
        .cloned()
        .unwrap_or_else(|| Product::new(id, 0.0)))
}

fn wishlist_lookup(args: &[&str], state: &AppState) -> Result<Product> {
    let id = id_arg(args)?;
    Ok(state
        .wishlist
        .list
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .unwrap_or_else(|| Product::new(id, 0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CartAction, WishlistAction};
    use crate::reducer::reduce;

    #[test]
    fn test_parse_add_with_name() {
        let command = parse("add A 10.50 Veggie Bowl", &AppState::default()).unwrap();
        assert_eq!(
            command,
            Command::Dispatch(Action::add_to_cart(
                Product::new("A", 10.5).with_name("Veggie Bowl")
            ))
        );
    }

    #[test]
    fn test_parse_rejects_bad_price() {
        assert!(parse("add A ten", &AppState::default()).is_err());
        assert!(parse("add A -1", &AppState::default()).is_err());
        assert!(parse("add A", &AppState::default()).is_err());
    }

    #[test]
    fn test_remove_uses_cart_copy() {
        let (state, _) = reduce(AppState::default(), &Action::add_to_cart(Product::new("A", 4.0)));
        let command = parse("remove A", &state).unwrap();

        match command {
            Command::Dispatch(Action::Cart(CartAction::Remove(product))) => {
                assert_eq!(product.price, 4.0);
                assert_eq!(product.quantity, Some(1));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unwish_unknown_still_dispatches() {
        let command = parse("unwish Z", &AppState::default()).unwrap();
        assert!(matches!(
            command,
            Command::Dispatch(Action::Wishlist(WishlistAction::Remove(_)))
        ));
    }

    #[test]
    fn test_queries_and_unknown() {
        let state = AppState::default();
        assert_eq!(parse("summary", &state).unwrap(), Command::ShowSummary);
        assert_eq!(parse("quit", &state).unwrap(), Command::Quit);
        assert!(parse("", &state).is_err());
        assert!(parse("checkout", &state).is_err());
    }
}
