//! Login page.

use barista_client::{Route, Store};
use barista_core::validation::validate_credentials;
use barista_core::Credentials;
use tracing::warn;

use crate::error::{AppError, AppResult};

/// Alert shown for any rejected login, whatever the server said.
pub const LOGIN_FAILED: &str = "Login Failed: Invalid email or password";

#[derive(Debug, Clone, Default)]
pub struct LoginPage {
    pub email: String,
    pub password: String,
}

impl LoginPage {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        LoginPage {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Signs in and returns the landing route.
    pub async fn submit(&self, store: &mut Store) -> AppResult<Route> {
        let credentials = Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        validate_credentials(&credentials)?;

        if let Err(e) = store.login(&credentials).await {
            warn!(email = %credentials.email, error = %e, "Login rejected");
            return Err(AppError::rejected(LOGIN_FAILED));
        }
        Ok(Route::Dashboard)
    }
}
