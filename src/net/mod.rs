//! Networking modules for the user REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema, and `error`
//! is the failure taxonomy shared by pages and the session store.

pub mod api;
pub mod error;
pub mod types;
