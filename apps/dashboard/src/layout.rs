//! # Layout
//!
//! The frame around every protected page: the sidebar menu, the auth guard
//! and the logout action.
//!
//! ```text
//! ┌──────────────┬──────────────────────────────────────────────┐
//! │ Barista Shop │                                              │
//! │              │                                              │
//! │ ▸ Dashboard  │              page content                    │
//! │   Customers  │                                              │
//! │   Items      │                                              │
//! │   Orders     │                                              │
//! │              │                                              │
//! │   Logout     │                                              │
//! └──────────────┴──────────────────────────────────────────────┘
//! ```

use barista_client::{Route, Store};
use tracing::{debug, info};

use crate::error::AppResult;

pub const APP_TITLE: &str = "Barista Shop";

/// Applies the auth guard to `requested`.
pub fn resolve(store: &Store, requested: Route) -> Route {
    let is_authenticated = store.auth().is_authenticated();
    let resolved = requested.clone().guard(is_authenticated);

    if resolved != requested {
        debug!(from = %requested, to = %resolved, is_authenticated, "Route redirected");
    }
    resolved
}

/// The sidebar with `active` highlighted.
///
/// Order details belong to the orders entry.
pub fn sidebar(active: &Route, user: Option<&str>) -> String {
    let highlighted = match active {
        Route::OrderDetails { .. } => &Route::Orders,
        other => other,
    };

    let mut out = String::new();
    out.push_str(APP_TITLE);
    if let Some(user) = user {
        out.push_str(&format!("  ({})", user));
    }
    out.push('\n');

    for (label, route) in Route::nav_menu() {
        let marker = if &route == highlighted { "▸" } else { " " };
        out.push_str(&format!("{} {:<10} {}\n", marker, label, route.path()));
    }
    out.push_str("  Logout\n");
    out
}

/// Signs out and returns where to go next.
pub fn logout(store: &mut Store) -> AppResult<Route> {
    store.logout()?;
    info!("Session cleared");
    Ok(Route::Login)
}

#[cfg(test)]
mod tests {
    use super::*;
    use barista_client::testing::mock_store;
    use serde_json::json;

    #[test]
    fn test_guard_signed_out() {
        let (store, _) = mock_store();
        assert_eq!(resolve(&store, Route::Customers), Route::Login);
        assert_eq!(resolve(&store, Route::Signup), Route::Signup);
    }

    #[tokio::test]
    async fn test_guard_signed_in_and_logout() {
        let (mut store, mock) = mock_store();
        mock.respond(json!({"email": "admin@barista.lk"}));
        store
            .login(&barista_core::Credentials {
                email: "admin@barista.lk".into(),
                password: "pw".into(),
            })
            .await
            .unwrap();

        assert_eq!(resolve(&store, Route::Login), Route::Dashboard);
        assert_eq!(resolve(&store, Route::Items), Route::Items);

        assert_eq!(logout(&mut store).unwrap(), Route::Login);
        assert_eq!(resolve(&store, Route::Items), Route::Login);
    }

    #[test]
    fn test_sidebar_highlights_orders_for_details() {
        let menu = sidebar(&Route::order_details("o-1"), Some("admin@barista.lk"));
        assert!(menu.starts_with("Barista Shop  (admin@barista.lk)"));
        assert!(menu.contains("▸ Orders"));
        assert!(!menu.contains("▸ Dashboard"));
        assert!(menu.ends_with("  Logout\n"));
    }
}
