//! Dispatcher for middleware action dispatch
//!
//! Actions dispatched here are queued and re-enter the middleware chain
//! from the beginning on the next turn of the event loop. Spawned tasks
//! hold a clone to report their results.

use crate::actions::Action;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(tx: UnboundedSender<Action>) -> Self {
        Self { tx }
    }

    /// Queue an action; actions are processed in dispatch order
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
