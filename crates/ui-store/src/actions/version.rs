//! Version check actions

/// Results of the current/latest version checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionAction {
    /// Running version resolved
    SetCurrent(String),
    /// Latest released version resolved
    SetLatest(String),
    /// Current version check failed
    CurrentFailed,
    /// Latest version check failed
    LatestFailed,
}
