//! Signup page.
//!
//! Errors stay on the form as a single line under the password fields
//! rather than an alert; [`SignupPage::error`] holds it.

use barista_client::{Route, Store};
use barista_core::validation::validate_registration;
use barista_core::Registration;
use tracing::warn;

use crate::error::{AppError, AppResult};

pub const SIGNUP_FAILED: &str = "Failed to signup";

#[derive(Debug, Clone, Default)]
pub struct SignupPage {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub(crate) error: Option<String>,
}

impl SignupPage {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(&mut self, store: &mut Store) -> AppResult<Route> {
        let registration = Registration {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };

        if let Err(e) = validate_registration(&registration, &self.confirm_password) {
            self.error = Some(e.to_string());
            return Err(e.into());
        }
        self.error = None;

        if let Err(e) = store.signup(&registration).await {
            warn!(email = %registration.email, error = %e, "Signup rejected");
            self.error = Some(SIGNUP_FAILED.to_string());
            return Err(AppError::rejected(SIGNUP_FAILED));
        }
        Ok(Route::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barista_client::testing::mock_store;
    use barista_client::TransportError;
    use serde_json::json;

    fn form(confirm: &str) -> SignupPage {
        SignupPage {
            name: "Test".into(),
            email: "testuser3@gmail.com".into(),
            password: "secret".into(),
            confirm_password: confirm.into(),
            ..SignupPage::default()
        }
    }

    #[tokio::test]
    async fn test_mismatch_is_local() {
        let (mut store, mock) = mock_store();
        let mut page = form("secrte");

        let err = page.submit(&mut store).await.unwrap_err();

        assert_eq!(err.message, "password do not match");
        assert_eq!(page.error(), Some("password do not match"));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_signup() {
        let (mut store, mock) = mock_store();
        mock.fail(TransportError::Status {
            status: 409,
            message: Some("Email taken".into()),
        });
        let mut page = form("secret");

        let err = page.submit(&mut store).await.unwrap_err();

        assert_eq!(err.message, "Failed to signup");
        assert_eq!(page.error(), Some("Failed to signup"));
        assert!(!store.auth().is_authenticated());
    }

    #[tokio::test]
    async fn test_signup_signs_in() {
        let (mut store, mock) = mock_store();
        mock.respond(json!({"name": "Test", "email": "testuser3@gmail.com"}));
        let mut page = form("secret");

        assert_eq!(page.submit(&mut store).await.unwrap(), Route::Dashboard);
        assert_eq!(page.error(), None);
        assert_eq!(store.auth().email(), Some("testuser3@gmail.com"));
    }
}
