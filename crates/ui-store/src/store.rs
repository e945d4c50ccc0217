use std::sync::mpsc::{self, Receiver};

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::reduce;
use crate::state::AppState;

/// Store - holds application state and manages the Redux loop
///
/// The store is the single writer of the current state. Every dispatched
/// action runs through the middleware chain and then the reducer, and the
/// reducer's result replaces the state.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, pending_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending_rx,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Replace entire state (useful for initialization or testing)
    pub fn replace_state(&mut self, state: AppState) {
        self.state = state;
    }

    /// Process an action, then every action middleware queued while handling it
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);

        while let Ok(action) = self.pending_rx.try_recv() {
            self.process(action);
        }
    }

    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{SessionAction, UiAction, UserProfile};
    use crate::middleware::LoggingMiddleware;
    use std::sync::{Arc, Mutex};

    /// Consumes every sidebar action
    struct BlockSidebar;

    impl Middleware for BlockSidebar {
        fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
            !matches!(action, Action::Ui(UiAction::SetSidebarCollapsed(_)))
        }
    }

    /// Marks the profile as fetched once it was loaded
    struct ProfileLoaded;

    impl Middleware for ProfileLoaded {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            if let Action::Session(SessionAction::SetProfile(_)) = action {
                dispatcher.dispatch(Action::Session(SessionAction::SetFetching(false)));
            }
            true
        }
    }

    /// Records the tags it sees
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl Middleware for Recorder {
        fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
            self.0.lock().unwrap().push(action.tag().to_string());
            true
        }
    }

    #[test]
    fn test_store_dispatch_toggle_dark_mode() {
        let mut store = Store::default();
        assert!(!store.state().dark_mode);

        store.dispatch(Action::Ui(UiAction::ToggleDarkMode));
        assert!(store.state().dark_mode);

        store.dispatch(Action::Ui(UiAction::ToggleDarkMode));
        assert!(!store.state().dark_mode);
    }

    #[test]
    fn test_middleware_can_consume() {
        let mut store = Store::default();
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(BlockSidebar));

        store.dispatch(Action::Ui(UiAction::SetSidebarCollapsed(true)));
        store.dispatch(Action::Ui(UiAction::SetLoggedIn(true)));

        assert!(!store.state().sidebar_collapsed);
        assert!(store.state().logged_in);
    }

    #[test]
    fn test_follow_up_actions_run_through_chain() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = Store::default();
        store.add_middleware(Box::new(ProfileLoaded));
        store.add_middleware(Box::new(Recorder(seen.clone())));
        assert!(store.state().user_fetching);

        store.dispatch(Action::Session(SessionAction::SetProfile(UserProfile {
            org_id: "a".to_string(),
            org_name: "Acme".to_string(),
            ..UserProfile::default()
        })));

        assert!(!store.state().user_fetching);
        assert_eq!(store.state().organization_list().len(), 1);
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["set-user-profile".to_string(), "set-user-fetching".to_string()]
        );
    }

    #[test]
    fn test_replace_state() {
        let mut store = Store::default();
        store.replace_state(AppState {
            logged_in: true,
            ..AppState::default()
        });
        assert!(store.state().logged_in);
    }
}
