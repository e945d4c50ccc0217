use std::sync::Arc;

use crate::actions::Action;
use crate::reducers::{organization_reducer, session_reducer, ui_reducer, version_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes actions to the slice reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Ui(action) => ui_reducer::reduce_ui(state, action),
        Action::Version(action) => version_reducer::reduce_version(state, action),
        Action::FeatureFlags(flags) => {
            state.feature_flags = Arc::new(flags.clone());
            state
        }
        Action::Session(action) => session_reducer::reduce_session(state, action),
        Action::Organization(action) => organization_reducer::reduce_organization(state, action),
        Action::Unknown(tag) => {
            log::trace!("No reducer for action {:?}", tag);
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{OrganizationAction, SessionAction, SessionPatch, UiAction, VersionAction};
    use crate::state::{Organization, Session};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn populated() -> AppState {
        AppState {
            current_version: "1.0.0".to_string(),
            feature_flags: Arc::new(BTreeMap::from([("alerts".to_string(), true)])),
            session: Some(Arc::new(Session::with_tokens("A", "R"))),
            organizations: Some(Arc::new(vec![Organization::placeholder("a", "Acme")])),
            ..AppState::default()
        }
    }

    fn assert_branches_shared(before: &AppState, after: &AppState) {
        assert!(Arc::ptr_eq(&before.feature_flags, &after.feature_flags));
        assert!(Arc::ptr_eq(
            before.session.as_ref().unwrap(),
            after.session.as_ref().unwrap()
        ));
        assert!(Arc::ptr_eq(
            before.organizations.as_ref().unwrap(),
            after.organizations.as_ref().unwrap()
        ));
    }

    #[test]
    fn test_unknown_action_returns_state_unchanged() {
        let state = populated();
        let next = reduce(state.clone(), &Action::Unknown("@@redux/INIT".to_string()));

        assert_eq!(next, state);
        assert_branches_shared(&state, &next);
    }

    #[test]
    fn test_flag_transitions_share_untouched_branches() {
        let state = populated();

        for action in [
            Action::Ui(UiAction::ToggleDarkMode),
            Action::Ui(UiAction::SetLoggedIn(true)),
            Action::Version(VersionAction::CurrentFailed),
            Action::Session(SessionAction::SetFetching(false)),
        ] {
            let next = reduce(state.clone(), &action);
            assert_ne!(next, state, "{} should change state", action.tag());
            assert_branches_shared(&state, &next);
        }
    }

    #[test]
    fn test_set_feature_flags_replaces_and_is_idempotent() {
        let flags = BTreeMap::from([
            ("dashboards".to_string(), true),
            ("traces".to_string(), false),
        ]);
        let action = Action::FeatureFlags(flags.clone());

        let once = reduce(populated(), &action);
        let twice = reduce(once.clone(), &action);

        assert_eq!(*once.feature_flags, flags);
        assert_eq!(once.feature_flags, twice.feature_flags);
        // full replace, the previous flag is gone
        assert!(!once.feature_flags.contains_key("alerts"));
    }

    #[test]
    fn test_error_flags_survive_every_action() {
        let mut state = reduce(populated(), &Action::Version(VersionAction::CurrentFailed));
        state = reduce(state, &Action::Version(VersionAction::LatestFailed));

        let actions = [
            Action::Ui(UiAction::ToggleDarkMode),
            Action::Ui(UiAction::SetLoggedIn(false)),
            Action::Ui(UiAction::SetSidebarCollapsed(true)),
            Action::FeatureFlags(BTreeMap::new()),
            Action::Version(VersionAction::SetCurrent("2.0.0".to_string())),
            Action::Version(VersionAction::SetLatest("2.0.1".to_string())),
            Action::Session(SessionAction::SetTokens(SessionPatch::default())),
            Action::Session(SessionAction::SetFetching(true)),
            Action::Session(SessionAction::SetFetchError(false)),
            Action::Organization(OrganizationAction::Replace(vec![])),
            Action::Unknown("x".to_string()),
        ];
        for action in &actions {
            state = reduce(state, action);
            assert!(state.current_version_error, "cleared by {}", action.tag());
            assert!(state.latest_version_error, "cleared by {}", action.tag());
        }
    }

    #[test]
    fn test_routes_to_slice_reducers() {
        let state = reduce(
            AppState::default(),
            &Action::Session(SessionAction::SetTokens(SessionPatch::tokens("A", "R"))),
        );
        assert_eq!(state.session.as_deref(), Some(&Session::with_tokens("A", "R")));

        let state = reduce(
            state,
            &Action::Organization(OrganizationAction::Replace(vec![Organization::placeholder(
                "o", "Org",
            )])),
        );
        assert_eq!(state.organization_list().len(), 1);
    }
}
