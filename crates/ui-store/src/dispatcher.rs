//! Follow-up queue for middleware
//!
//! Middleware cannot touch the state directly. To react to an action with
//! another one (e.g. clear `user_fetching` once a profile arrived) it queues
//! the follow-up here; the store drains the queue in FIFO order once the
//! triggering action has been reduced.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Handle for queueing follow-up actions on a `Store`
#[derive(Clone)]
pub struct Dispatcher {
    queue_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(queue_tx: Sender<Action>) -> Self {
        Self { queue_tx }
    }

    /// Queue `action`; logged and dropped if the store is gone
    pub fn dispatch(&self, action: Action) {
        let tag = action.tag().to_string();
        if let Err(e) = self.queue_tx.send(action) {
            log::error!("Dispatcher: store gone, dropping {}: {}", tag, e);
        }
    }
}
