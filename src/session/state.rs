//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route gates to choose between the loading overlay, the
//! requested view, and a redirect. Only `SessionStore` writes it.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Authentication state and in-flight status of the initial identity check.
///
/// `is_authenticated` keeps its last-known value while `loading` is set and
/// must not drive navigation until `loading` clears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { is_authenticated: false, loading: true }
    }
}

/// Coarse view of `SessionState` used by the gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Initial identity check still in flight.
    Init,
    ResolvedAuth,
    ResolvedAnon,
}

impl SessionState {
    pub const fn resolved(is_authenticated: bool) -> Self {
        Self { is_authenticated, loading: false }
    }

    pub const fn phase(self) -> SessionPhase {
        match (self.loading, self.is_authenticated) {
            (true, _) => SessionPhase::Init,
            (false, true) => SessionPhase::ResolvedAuth,
            (false, false) => SessionPhase::ResolvedAnon,
        }
    }
}
