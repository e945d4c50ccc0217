//! Version Reducer
//!
//! Records version check results. The error flags only ever go from
//! `false` to `true`.

use crate::actions::VersionAction;
use crate::state::AppState;

/// Reduce version check actions
pub fn reduce_version(mut state: AppState, action: &VersionAction) -> AppState {
    match action {
        VersionAction::SetCurrent(version) => {
            state.current_version = version.clone();
        }
        VersionAction::SetLatest(version) => {
            state.latest_version = version.clone();
        }
        VersionAction::CurrentFailed => {
            state.current_version_error = true;
        }
        VersionAction::LatestFailed => {
            state.latest_version_error = true;
        }
    }
    state
}
