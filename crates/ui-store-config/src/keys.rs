//! Preference keys shared with the web client's local storage

/// `"true"` when the user was logged in during the previous run
pub const IS_LOGGED_IN: &str = "IS_LOGGED_IN";

/// `"true"` when the sidebar was collapsed during the previous run
pub const IS_SIDEBAR_COLLAPSED: &str = "isSideBarCollapsed";

/// Cached access token
pub const AUTH_TOKEN: &str = "AUTH_TOKEN";

/// Cached refresh token
pub const REFRESH_AUTH_TOKEN: &str = "REFRESH_AUTH_TOKEN";

/// Stored theme identifier (`darkMode` or `lightMode`)
pub const THEME: &str = "THEME";
