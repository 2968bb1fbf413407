//! Route-gate decisions.
//!
//! DESIGN
//! ======
//! The decision is a pure function of the gate kind and `SessionState`. The
//! requested path never changes the outcome, so the Leptos gate components
//! only have to map `GateOutcome` onto a view.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::session::state::SessionState;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const VERIFY_OTP_PATH: &str = "/verify-otp";
pub const RESEND_OTP_PATH: &str = "/resend-otp";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateKind {
    /// Login, register and OTP views; signed-in users are sent home.
    Public,
    /// Everything behind the login.
    Private,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Loading,
    Render,
    Redirect(&'static str),
}

pub fn decide(kind: GateKind, state: SessionState) -> GateOutcome {
    if state.loading {
        return GateOutcome::Loading;
    }
    match (kind, state.is_authenticated) {
        (GateKind::Public, true) => GateOutcome::Redirect(HOME_PATH),
        (GateKind::Public, false) | (GateKind::Private, true) => GateOutcome::Render,
        (GateKind::Private, false) => GateOutcome::Redirect(LOGIN_PATH),
    }
}

/// Outcome for any path without a view: home when signed in, login otherwise.
pub fn decide_fallback(state: SessionState) -> GateOutcome {
    if state.loading {
        GateOutcome::Loading
    } else if state.is_authenticated {
        GateOutcome::Redirect(HOME_PATH)
    } else {
        GateOutcome::Redirect(LOGIN_PATH)
    }
}
