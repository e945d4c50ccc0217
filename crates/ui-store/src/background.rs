//! Background worker that owns the store
//!
//! The worker thread is the only writer of the state:
//! - Producers send actions through a channel
//! - The worker dispatches them one at a time, in arrival order
//! - After each action the new snapshot is published to `SharedState`
//!
//! Readers never see a half-applied action. The worker stops once every
//! sender of the action channel has been dropped.

use crate::actions::Action;
use crate::state::AppState;
use crate::store::Store;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, RwLock};
use std::thread;

/// Latest published snapshot, read-only for everyone but the worker
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the worker thread
///
/// - `store`: the store, already configured with middleware
/// - `action_rx`: receives actions from producers
/// - `shared`: where snapshots are published
pub fn spawn_store_worker(
    store: Store,
    action_rx: Receiver<Action>,
    shared: SharedState,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        worker_loop(store, action_rx, shared);
    })
}

fn worker_loop(mut store: Store, action_rx: Receiver<Action>, shared: SharedState) {
    log::info!("Store worker started");
    publish(&store, &shared);

    while let Ok(action) = action_rx.recv() {
        store.dispatch(action);
        publish(&store, &shared);
    }

    log::info!("Action channel disconnected, store worker stopped");
}

fn publish(store: &Store, shared: &SharedState) {
    match shared.write() {
        Ok(mut snapshot) => *snapshot = store.state().clone(),
        Err(e) => log::error!("Failed to publish state snapshot: {}", e),
    }
}
