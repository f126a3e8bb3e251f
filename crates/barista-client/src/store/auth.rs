//! Auth slice: login, signup, logout and session restore.
//!
//! ```text
//!             login / signup fulfilled
//!   ┌────────────┐ ──────────────────────► ┌───────────────┐
//!   │ signed out │                          │ authenticated │
//!   └────────────┘ ◄────────────────────── └───────────────┘
//!                         logout
//! ```
//!
//! Entering the authenticated state writes the user's email under the session
//! key; logout removes it. On startup the presence of that marker is all it
//! takes to be considered authenticated.

use barista_core::{AuthUser, Credentials, Registration};
use serde_json::json;
use tracing::{info, warn};

use super::Store;
use crate::error::ClientResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSlice {
    user: Option<AuthUser>,
    is_authenticated: bool,
}

impl AuthSlice {
    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Email of the signed-in user, when known.
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(AuthUser::marker)
    }

    fn signed_in(&mut self, user: AuthUser) {
        self.user = Some(user);
        self.is_authenticated = true;
    }

    fn signed_out(&mut self) {
        self.user = None;
        self.is_authenticated = false;
    }
}

/// The value persisted for `user`: its email, or the raw payload if it has none.
fn marker_for(user: &AuthUser) -> String {
    user.marker()
        .map(str::to_string)
        .unwrap_or_else(|| user.0.to_string())
}

impl Store {
    pub async fn login(&mut self, credentials: &Credentials) -> ClientResult<()> {
        let user = self.api.users().login(credentials).await?;
        self.sign_in(user)?;
        info!(email = %credentials.email, "Logged in");
        Ok(())
    }

    pub async fn signup(&mut self, registration: &Registration) -> ClientResult<()> {
        let user = self.api.users().register(registration).await?;
        self.sign_in(user)?;
        info!(email = %registration.email, "Signed up");
        Ok(())
    }

    /// Local only; the backend is not told.
    pub fn logout(&mut self) -> ClientResult<()> {
        self.session.remove(&self.session_key)?;
        self.auth.signed_out();
        info!("Logged out");
        Ok(())
    }

    fn sign_in(&mut self, user: AuthUser) -> ClientResult<()> {
        self.session.set(&self.session_key, &marker_for(&user))?;
        self.auth.signed_in(user);
        Ok(())
    }

    /// Marks the session authenticated if a marker is stored.
    pub(super) fn restore_session(&mut self) {
        match self.session.get(&self.session_key) {
            Ok(Some(marker)) if !marker.trim().is_empty() => {
                info!(key = %self.session_key, "Restored session from storage");
                self.auth.signed_in(AuthUser(json!({ "email": marker })));
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Could not read session storage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::config::Endpoints;
    use crate::session::{MemoryStorage, SessionStorage};
    use crate::testing::{mock_store, MockTransport};
    use std::sync::Arc;

    fn credentials() -> Credentials {
        Credentials {
            email: "namal@gmail.com".into(),
            password: "7890".into(),
        }
    }

    #[tokio::test]
    async fn test_login_sets_state() {
        let (mut store, mock) = mock_store();
        mock.respond(json!({"message": "Login successful", "sendingUser": {"name": "Namal", "email": "namal@gmail.com"}}));

        store.login(&credentials()).await.unwrap();

        assert!(store.auth().is_authenticated());
        assert_eq!(store.auth().email(), Some("namal@gmail.com"));
        assert_eq!(
            store.session.get("user").unwrap().as_deref(),
            Some("namal@gmail.com")
        );
    }

    #[tokio::test]
    async fn test_failed_login_stays_signed_out() {
        let (mut store, mock) = mock_store();
        mock.fail(crate::error::TransportError::Status {
            status: 401,
            message: Some("Invalid credentials".into()),
        });

        let err = store.login(&credentials()).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!store.auth().is_authenticated());
        assert_eq!(store.session.get("user").unwrap(), None);
    }

    #[tokio::test]
    async fn test_signup_then_logout() {
        let (mut store, mock) = mock_store();
        mock.respond(json!({"name": "Test", "email": "testuser3@gmail.com"}));

        store
            .signup(&Registration {
                name: "Test".into(),
                email: "testuser3@gmail.com".into(),
                password: "pw".into(),
            })
            .await
            .unwrap();
        assert!(store.auth().is_authenticated());

        store.logout().unwrap();
        assert!(!store.auth().is_authenticated());
        assert!(store.auth().user().is_none());
        assert_eq!(store.session.get("user").unwrap(), None);
    }

    #[test]
    fn test_restore_from_marker() {
        let api = ApiClient::new(Arc::new(MockTransport::new()), Endpoints::default());
        let storage = MemoryStorage::with_entry("user", "jane@example.com");

        let store = Store::new(api, Box::new(storage), "user");

        assert!(store.auth().is_authenticated());
        assert_eq!(store.auth().email(), Some("jane@example.com"));
    }

    #[test]
    fn test_no_marker_means_signed_out() {
        let api = ApiClient::new(Arc::new(MockTransport::new()), Endpoints::default());
        let storage = MemoryStorage::with_entry("other", "x");

        let store = Store::new(api, Box::new(storage), "user");

        assert!(!store.auth().is_authenticated());
    }

    #[test]
    fn test_marker_without_email() {
        let user = AuthUser(json!({"token": "abc"}));
        assert_eq!(marker_for(&user), r#"{"token":"abc"}"#);
    }
}
