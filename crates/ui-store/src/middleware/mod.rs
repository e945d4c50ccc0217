//! Middleware
//!
//! Every action reaches the middleware chain before the reducer, in the
//! order middleware was added to the `Store`.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod logging;

pub use logging::LoggingMiddleware;

pub trait Middleware: Send {
    /// Observe `action` against the state it is about to be applied to
    ///
    /// Returning `false` consumes the action: later middleware and the
    /// reducer never see it. Actions queued on `dispatcher` are processed
    /// after this one has been reduced, before `Store::dispatch` returns,
    /// and run through the whole chain themselves.
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
