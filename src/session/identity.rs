//! Seam between the session store and the "whoami" endpoint.

use std::future::Future;

use crate::net::api::UserApi;
use crate::net::error::ApiError;
use crate::net::types::IdentityCheck;

/// Answers whether the current visitor holds a valid session.
pub trait IdentityProvider {
    fn whoami(&self) -> impl Future<Output = Result<IdentityCheck, ApiError>>;
}

/// Identity provider backed by `GET /me` on the user API.
#[derive(Clone, Debug)]
pub struct HttpIdentity {
    api: UserApi,
}

impl HttpIdentity {
    pub fn new(api: UserApi) -> Self {
        Self { api }
    }
}

impl IdentityProvider for HttpIdentity {
    fn whoami(&self) -> impl Future<Output = Result<IdentityCheck, ApiError>> {
        self.api.me()
    }
}
