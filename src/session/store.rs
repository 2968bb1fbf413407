//! Owner of the process-wide `SessionState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one store, spawns `check_auth` once on mount, and provides
//! the store through context. Pages call `refresh_auth` after login and
//! logout so the gates follow the server-side cookie without flashing the
//! full-screen loader.
//!
//! ERROR HANDLING
//! ==============
//! Every identity failure (transport, status, timeout) collapses into
//! `is_authenticated = false` plus a log line. Nothing is returned to callers.
//!
//! CONCURRENCY
//! ===========
//! Checks are not sequenced: when an initial check and a refresh overlap,
//! whichever resolves last overwrites the state. A slow initial check can
//! therefore clobber a newer refresh result.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use super::identity::IdentityProvider;
use super::race::{Timer, race_timeout};
use super::state::{SessionPhase, SessionState};
use crate::net::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CheckKind {
    Initial,
    Refresh,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Initial => "authentication check",
            Self::Refresh => "auth refresh",
        })
    }
}

/// Session store reconciling `SessionState` against an identity provider.
///
/// Clones share one state cell, so a clone handed to a page mutates the same
/// state the gates read.
pub struct SessionStore<I, T> {
    state: ArcRwSignal<SessionState>,
    identity: Arc<I>,
    timer: Arc<T>,
    timeout: Duration,
}

impl<I, T> Clone for SessionStore<I, T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            identity: Arc::clone(&self.identity),
            timer: Arc::clone(&self.timer),
            timeout: self.timeout,
        }
    }
}

impl<I, T> SessionStore<I, T>
where
    I: IdentityProvider,
    T: Timer,
{
    /// Create a store in the initial loading state. No check runs until
    /// `check_auth` is awaited.
    pub fn new(identity: I, timer: T, timeout: Duration) -> Self {
        Self {
            state: ArcRwSignal::new(SessionState::default()),
            identity: Arc::new(identity),
            timer: Arc::new(timer),
            timeout,
        }
    }

    /// Current state, tracked by the enclosing reactive scope.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated
    }

    pub fn loading(&self) -> bool {
        self.snapshot().loading
    }

    pub fn phase(&self) -> SessionPhase {
        self.snapshot().phase()
    }

    /// Full identity check: raises `loading`, queries identity under the
    /// timeout, records the outcome, and always clears `loading`.
    pub async fn check_auth(&self) {
        self.state.update(|s| s.loading = true);
        let authenticated = self.query(CheckKind::Initial).await;
        self.state.update(|s| {
            s.is_authenticated = authenticated;
            s.loading = false;
        });
    }

    /// Re-validate the session without touching `loading`.
    pub async fn refresh_auth(&self) {
        let authenticated = self.query(CheckKind::Refresh).await;
        self.state.update(|s| s.is_authenticated = authenticated);
    }

    async fn query(&self, kind: CheckKind) -> bool {
        let outcome = race_timeout(self.timer.as_ref(), self.timeout, self.identity.whoami())
            .await
            .map_err(ApiError::from)
            .and_then(|result| result);
        match outcome {
            Ok(check) => {
                log::debug!("{kind} resolved: authenticated={}", check.authenticated);
                check.authenticated
            }
            Err(err) => {
                log::warn!("{kind} failed: {err}");
                false
            }
        }
    }
}
