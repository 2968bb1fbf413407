use super::*;

const LOADING_STATES: [SessionState; 2] = [
    SessionState { is_authenticated: false, loading: true },
    SessionState { is_authenticated: true, loading: true },
];

// =============================================================
// Public gate
// =============================================================

#[test]
fn public_gate_shows_only_loader_while_loading() {
    for state in LOADING_STATES {
        assert_eq!(decide(GateKind::Public, state), GateOutcome::Loading);
    }
}

#[test]
fn public_gate_sends_signed_in_user_home() {
    assert_eq!(decide(GateKind::Public, SessionState::resolved(true)), GateOutcome::Redirect(HOME_PATH));
}

#[test]
fn public_gate_renders_for_anonymous_user() {
    assert_eq!(decide(GateKind::Public, SessionState::resolved(false)), GateOutcome::Render);
}

// =============================================================
// Private gate
// =============================================================

#[test]
fn private_gate_shows_only_loader_while_loading() {
    for state in LOADING_STATES {
        assert_eq!(decide(GateKind::Private, state), GateOutcome::Loading);
    }
}

#[test]
fn private_gate_renders_for_signed_in_user() {
    assert_eq!(decide(GateKind::Private, SessionState::resolved(true)), GateOutcome::Render);
}

#[test]
fn private_gate_sends_anonymous_user_to_login() {
    assert_eq!(decide(GateKind::Private, SessionState::resolved(false)), GateOutcome::Redirect(LOGIN_PATH));
}

// =============================================================
// Fallback
// =============================================================

#[test]
fn fallback_waits_for_initial_check() {
    for state in LOADING_STATES {
        assert_eq!(decide_fallback(state), GateOutcome::Loading);
    }
}

#[test]
fn fallback_redirects_by_authentication() {
    assert_eq!(decide_fallback(SessionState::resolved(true)), GateOutcome::Redirect(HOME_PATH));
    assert_eq!(decide_fallback(SessionState::resolved(false)), GateOutcome::Redirect(LOGIN_PATH));
}
