//! Reducers
//!
//! `app_reducer::reduce` is the root; it routes each domain action to the
//! matching slice reducer. Reducers take the state by value and hand back
//! the next state. They replace the branches they touch with new `Arc`s and
//! leave every other branch shared with the previous snapshot.

pub mod app_reducer;
pub mod organization_reducer;
pub mod session_reducer;
pub mod ui_reducer;
pub mod version_reducer;

pub use app_reducer::reduce;
