//! UI actions
//!
//! Theme, login flag and sidebar.

/// Actions for top-level UI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Flip between dark and light mode
    ToggleDarkMode,
    SetLoggedIn(bool),
    SetSidebarCollapsed(bool),
}
