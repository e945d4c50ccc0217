//! UI Reducer
//!
//! Handles theme, login and sidebar flags.

use crate::actions::UiAction;
use crate::state::AppState;

/// Reduce UI actions
pub fn reduce_ui(mut state: AppState, action: &UiAction) -> AppState {
    match action {
        UiAction::ToggleDarkMode => {
            state.dark_mode = !state.dark_mode;
        }
        UiAction::SetLoggedIn(logged_in) => {
            state.logged_in = *logged_in;
        }
        UiAction::SetSidebarCollapsed(collapsed) => {
            state.sidebar_collapsed = *collapsed;
        }
    }
    state
}
