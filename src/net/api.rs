//! REST API helpers for the user endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, always sending the
//! session cookie.
//! Elsewhere: stubs returning `ApiError::Unavailable`, since the session
//! cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx replies surface the
//! server's `message` when present so pages can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::error::ApiError;
use super::types::{ApiEnvelope, IdentityCheck, LoginRequest, OtpRequest, RegisterRequest, ResendOtpRequest};

/// How strictly a 2xx envelope is checked before a call counts as successful.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Acceptance {
    /// Only an explicit `success: false` fails the call.
    NotRejected,
    /// The envelope must carry `success: true`.
    Explicit,
}

/// Client for the user API rooted at a configured base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserApi {
    base_url: String,
}

impl UserApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Ask `GET /me` whether the session cookie is still valid.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status; a 2xx reply
    /// without `success: true` is an unauthenticated `IdentityCheck`, not an error.
    pub async fn me(&self) -> Result<IdentityCheck, ApiError> {
        let envelope = self.get("me").await?;
        Ok(IdentityCheck::from_envelope(&envelope))
    }

    /// Log in via `POST /login`; the server sets the session cookie.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<ApiEnvelope, ApiError> {
        let envelope = self.post("login", Some(request)).await?;
        accept(envelope, Acceptance::NotRejected, "Login failed")
    }

    /// Create an account via `POST /register`. An OTP is mailed on success.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server explicitly reports success.
    pub async fn register(&self, request: &RegisterRequest) -> Result<ApiEnvelope, ApiError> {
        let envelope = self.post("register", Some(request)).await?;
        accept(envelope, Acceptance::Explicit, "Registration failed. Please try again.")
    }

    /// Confirm a registration code via `POST /verify-otp`.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server explicitly accepts the code.
    pub async fn verify_otp(&self, request: &OtpRequest) -> Result<ApiEnvelope, ApiError> {
        let envelope = self.post("verify-otp", Some(request)).await?;
        accept(envelope, Acceptance::Explicit, "Invalid OTP. Please try again.")
    }

    /// Ask for a fresh code via `POST /resend-otp`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn resend_otp(&self, request: &ResendOtpRequest) -> Result<ApiEnvelope, ApiError> {
        let envelope = self.post("resend-otp", Some(request)).await?;
        accept(envelope, Acceptance::NotRejected, "Something went wrong!")
    }

    /// End the session via `POST /logout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn logout(&self) -> Result<ApiEnvelope, ApiError> {
        let envelope = self.post::<()>("logout", None).await?;
        accept(envelope, Acceptance::NotRejected, "Logout failed")
    }

    async fn get(&self, path: &str) -> Result<ApiEnvelope, ApiError> {
        #[cfg(feature = "csr")]
        {
            let response = gloo_net::http::Request::get(&self.endpoint(path))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(transport_error)?;
            read_envelope(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    async fn post<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<ApiEnvelope, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::post(&self.endpoint(path))
                .credentials(web_sys::RequestCredentials::Include);
            let response = match body {
                Some(body) => builder.json(body).map_err(transport_error)?.send().await,
                None => builder.send().await,
            }
            .map_err(transport_error)?;
            read_envelope(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
async fn read_envelope(response: gloo_net::http::Response) -> Result<ApiEnvelope, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    interpret_response(status, &body)
}

/// Map a raw status + body onto the envelope or a typed error.
///
/// Error statuses may carry HTML or nothing at all, so their body is parsed
/// leniently; a 2xx body must be a valid envelope.
#[cfg(any(test, feature = "csr"))]
fn interpret_response(status: u16, body: &str) -> Result<ApiEnvelope, ApiError> {
    let parsed = if body.trim().is_empty() {
        Ok(ApiEnvelope::default())
    } else {
        serde_json::from_str::<ApiEnvelope>(body).map_err(|e| ApiError::Decode(e.to_string()))
    };

    if !(200..300).contains(&status) {
        let fallback = status_failed_message(status);
        let message = parsed.map_or(fallback.clone(), |envelope| envelope.message_or(&fallback));
        return Err(ApiError::Status { status, message });
    }
    parsed
}

#[cfg(any(test, feature = "csr"))]
fn status_failed_message(status: u16) -> String {
    format!("request failed with status {status}")
}

fn accept(envelope: ApiEnvelope, acceptance: Acceptance, fallback: &str) -> Result<ApiEnvelope, ApiError> {
    let accepted = match acceptance {
        Acceptance::NotRejected => envelope.success != Some(false),
        Acceptance::Explicit => envelope.success == Some(true),
    };
    if accepted {
        Ok(envelope)
    } else {
        Err(ApiError::Rejected(envelope.message_or(fallback)))
    }
}
