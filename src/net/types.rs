//! Wire DTOs for the user API.
//!
//! DESIGN
//! ======
//! The server wraps every reply in a loose `{ success, message, data }`
//! envelope. Only `success` and `message` are read here; the identity check
//! narrows the reply further to a single boolean.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response envelope shared by all user API endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_owned()
    }
}

/// Result of the "whoami" query, reduced to the one signal the session store consumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityCheck {
    pub authenticated: bool,
}

impl IdentityCheck {
    pub fn from_envelope(envelope: &ApiEnvelope) -> Self {
        Self { authenticated: envelope.success == Some(true) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtpRequest {
    pub otp: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResendOtpRequest {
    pub email: String,
}
