//! # Routing
//!
//! The route table and the auth guard in front of it.
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Path                      Page           Access                        │
//! │  ────────────────────────  ─────────────  ──────────────────────────    │
//! │  /                         Dashboard      signed in                     │
//! │  /customers                Customers      signed in                     │
//! │  /items                    Items          signed in                     │
//! │  /orders                   Orders         signed in                     │
//! │  /order-details?id=<id>    OrderDetails   signed in                     │
//! │  /login                    Login          signed out                    │
//! │  /signup                   Signup         signed out                    │
//! │                                                                         │
//! │  Guard:  signed out + protected route  ──► /login                      │
//! │          signed in  + /login | /signup ──► /                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

use crate::error::ClientError;

/// A page of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Customers,
    Items,
    Orders,
    /// `id` comes from the query string and may be missing.
    OrderDetails { id: Option<String> },
    Login,
    Signup,
}

impl Route {
    /// Sidebar entries, in display order.
    pub fn nav_menu() -> [(&'static str, Route); 4] {
        [
            ("Dashboard", Route::Dashboard),
            ("Customers", Route::Customers),
            ("Items", Route::Items),
            ("Orders", Route::Orders),
        ]
    }

    pub fn order_details(id: impl Into<String>) -> Self {
        Route::OrderDetails {
            id: Some(id.into()),
        }
    }

    /// Path including the query string.
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Customers => "/customers".to_string(),
            Route::Items => "/items".to_string(),
            Route::Orders => "/orders".to_string(),
            Route::OrderDetails { id: Some(id) } => {
                let query: String = form_urlencoded::Serializer::new(String::new())
                    .append_pair("id", id)
                    .finish();
                format!("/order-details?{}", query)
            }
            Route::OrderDetails { id: None } => "/order-details".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
        }
    }

    /// Everything except the login and signup pages needs a session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::Signup)
    }

    /// The route actually shown for `self`, given the auth state.
    pub fn guard(self, is_authenticated: bool) -> Route {
        match (is_authenticated, self.is_protected()) {
            (false, true) => Route::Login,
            (true, false) => Route::Dashboard,
            _ => self,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (path, query) = match s.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (s, None),
        };

        // Leading and trailing slashes are optional.
        match path.trim_matches('/') {
            "" => Ok(Route::Dashboard),
            "customers" => Ok(Route::Customers),
            "items" => Ok(Route::Items),
            "orders" => Ok(Route::Orders),
            "order-details" => {
                let id = query.and_then(|q| {
                    form_urlencoded::parse(q.as_bytes())
                        .find(|(key, _)| key == "id")
                        .map(|(_, value)| value.into_owned())
                        .filter(|id| !id.is_empty())
                });
                Ok(Route::OrderDetails { id })
            }
            "login" => Ok(Route::Login),
            "signup" => Ok(Route::Signup),
            _ => Err(ClientError::UnknownRoute(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Dashboard);
        assert_eq!("".parse::<Route>().unwrap(), Route::Dashboard);
        assert_eq!("/customers/".parse::<Route>().unwrap(), Route::Customers);
        assert_eq!("items".parse::<Route>().unwrap(), Route::Items);
        assert_eq!(
            "/order-details?id=65f1".parse::<Route>().unwrap(),
            Route::order_details("65f1")
        );
        assert_eq!(
            "/order-details".parse::<Route>().unwrap(),
            Route::OrderDetails { id: None }
        );
        assert!("/reports".parse::<Route>().is_err());
    }

    #[test]
    fn test_path_round_trip() {
        for (_, route) in Route::nav_menu() {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
        let details = Route::order_details("a b");
        assert_eq!(details.path(), "/order-details?id=a+b");
        assert_eq!(details.path().parse::<Route>().unwrap(), details);
    }

    #[test]
    fn test_guard() {
        assert_eq!(Route::Orders.guard(false), Route::Login);
        assert_eq!(Route::order_details("x").guard(false), Route::Login);
        assert_eq!(Route::Login.guard(true), Route::Dashboard);
        assert_eq!(Route::Signup.guard(true), Route::Dashboard);
        assert_eq!(Route::Signup.guard(false), Route::Signup);
        assert_eq!(Route::Items.guard(true), Route::Items);
    }

    #[test]
    fn test_nav_menu() {
        let labels: Vec<&str> = Route::nav_menu().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Dashboard", "Customers", "Items", "Orders"]);
    }
}
