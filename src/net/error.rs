//! Failure taxonomy for user API calls.

use std::time::Duration;

use crate::session::race::Elapsed;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx response. `message` is the server's own message when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    /// 2xx response whose envelope reported `success: false`.
    #[error("{0}")]
    Rejected(String),
    #[error("not available outside the browser")]
    Unavailable,
    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },
}

impl From<Elapsed> for ApiError {
    fn from(elapsed: Elapsed) -> Self {
        Self::Timeout { after_ms: duration_ms(elapsed.after) }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
