//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page validates its own form input and calls the user API; pages
//! that change the session hand off to `SessionStore::refresh_auth`.

pub mod form;
pub mod home;
pub mod login;
pub mod register;
pub mod resend_otp;
pub mod verify_otp;
