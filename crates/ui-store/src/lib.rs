//! Reducer-driven session and UI state
//!
//! `AppState` is built once by [`initial::bootstrap`] (or
//! [`initial::initial_state`] with explicit collaborators) and afterwards only
//! replaced by [`reducers::reduce`], driven by a [`store::Store`] that runs
//! every [`actions::Action`] through its middleware chain first.

pub mod actions;
pub mod background;
pub mod dispatcher;
pub mod initial;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;

pub use actions::Action;
pub use initial::{bootstrap, initial_state};
pub use reducers::reduce;
pub use state::AppState;
pub use store::Store;
