use super::*;

#[test]
fn default_state_is_loading_and_anonymous() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated);
    assert_eq!(state.phase(), SessionPhase::Init);
}

#[test]
fn loading_hides_stale_authentication() {
    let state = SessionState { is_authenticated: true, loading: true };
    assert_eq!(state.phase(), SessionPhase::Init);
}

#[test]
fn resolved_states_map_to_terminal_phases() {
    assert_eq!(SessionState::resolved(true).phase(), SessionPhase::ResolvedAuth);
    assert_eq!(SessionState::resolved(false).phase(), SessionPhase::ResolvedAnon);
}
