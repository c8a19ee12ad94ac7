//! Dispatcher for follow-up actions
//!
//! Middleware and background tasks never touch the store directly. They send
//! actions through the Dispatcher; the store picks them up on its own thread
//! in [`Store::process_pending`](crate::store::Store::process_pending).
//!
//! This enables patterns like:
//! - LookupDiscount effect resolves -> DiscountLoaded re-enters the store
//! - Middleware rejects a blank promo code -> PromocodeInvalid

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions back into the store
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's pending queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action; it goes through the full middleware chain when the
    /// store drains its queue.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
