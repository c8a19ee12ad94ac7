//! View Models
//!
//! Read-only projections of the state for the presentation layer.

mod order_summary;

pub use order_summary::OrderSummaryViewModel;
