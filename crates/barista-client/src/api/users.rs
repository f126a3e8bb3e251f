//! Authentication endpoints.
//!
//! The response payload is opaque; see [`AuthUser`].

use barista_core::{AuthUser, Credentials, Registration};

use super::ApiClient;
use crate::error::ClientResult;
use crate::transport::Method;

/// Handle for `{auth}/login` and `{auth}/register`.
#[derive(Debug, Clone, Copy)]
pub struct UserApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UserApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        UserApi { client }
    }

    pub async fn login(&self, credentials: &Credentials) -> ClientResult<AuthUser> {
        self.client
            .request(
                Method::Post,
                &self.client.endpoints().login(),
                Some(credentials),
                "login",
                "failed to login",
            )
            .await
    }

    pub async fn register(&self, registration: &Registration) -> ClientResult<AuthUser> {
        self.client
            .request(
                Method::Post,
                &self.client.endpoints().register(),
                Some(registration),
                "signup",
                "failed to signup",
            )
            .await
    }
}
