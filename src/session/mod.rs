//! Process-wide authentication session.
//!
//! ARCHITECTURE
//! ============
//! `state` is the plain data the route gates read, `store` owns and mutates
//! it, `identity` is the seam to the "whoami" endpoint, and `race` bounds
//! each identity query with a timer.

pub mod identity;
pub mod race;
pub mod state;
pub mod store;

use self::identity::HttpIdentity;
use self::race::BrowserTimer;
use self::store::SessionStore;

/// The session store wired to the real user API and browser timers.
pub type PortalSession = SessionStore<HttpIdentity, BrowserTimer>;
