//! Domain Models
//!
//! Core domain types shared by state, reducers and effects.

mod money;
mod product;

pub use money::{adjust_amount, format_amount, parse_amount};
pub use product::{Product, ProductId};
