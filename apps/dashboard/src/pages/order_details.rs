//! Order details page: `/order-details?id=<id>`.

use barista_client::{Route, Store};
use barista_core::Order;

use crate::error::{AppError, AppResult, ErrorCode};
use crate::render;

pub const MISSING_ID: &str = "No order id given";

#[derive(Debug, Clone, Default)]
pub struct OrderDetailsPage {
    id: Option<String>,
}

impl OrderDetailsPage {
    /// Takes the id from the route's query string.
    pub fn from_route(route: &Route) -> Self {
        match route {
            Route::OrderDetails { id } => OrderDetailsPage { id: id.clone() },
            _ => OrderDetailsPage::default(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Fetches the order and makes it the store's selected order.
    pub async fn load<'s>(&self, store: &'s mut Store) -> AppResult<&'s Order> {
        let id = self
            .id
            .as_deref()
            .ok_or_else(|| AppError::new(ErrorCode::NotFound, MISSING_ID))?;
        Ok(store.fetch_order(id).await?)
    }

    /// Renders the selected order, if one is loaded.
    pub fn render(store: &Store, currency: &str) -> String {
        match store.orders().selected() {
            Some(order) => format!(
                "{}\n\nItems\n{}",
                render::order_summary_table(order, currency),
                render::order_lines_table(order, currency)
            ),
            None => "Loading...".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barista_client::testing::mock_store;
    use barista_client::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_loads_populated_order() {
        let (mut store, mock) = mock_store();
        mock.respond(json!({
            "_id": "65f1aa",
            "customerId": {"_id": "c-1", "name": "Jane", "email": "jane@example.com", "telephone": "077"},
            "date": "2024-03-01T10:00:00Z",
            "status": "preparing",
            "total": 850,
            "orderItems": [
                {"itemId": {"_id": "i-1", "name": "Latte", "category": "Beverage", "price": 350}, "quantity": 1, "price": 350},
                {"itemId": "i-2", "quantity": 1, "price": 500}
            ]
        }));

        let page = OrderDetailsPage::from_route(&"/order-details?id=65f1aa".parse::<Route>().unwrap());
        let order = page.load(&mut store).await.unwrap();
        assert_eq!(order.id, "65f1aa");

        assert_eq!(mock.requests_to(Method::Get, "/orders/65f1aa").len(), 1);
        let rendered = OrderDetailsPage::render(&store, "LKR");
        assert!(rendered.contains("2024-03-01"));
        assert!(rendered.contains("Jane"));
        assert!(rendered.contains("LKR 850.00"));
        assert!(rendered.contains("Latte"));
        assert!(rendered.contains("Unknown"));
    }

    #[tokio::test]
    async fn test_missing_id_sends_nothing() {
        let (mut store, mock) = mock_store();
        let page = OrderDetailsPage::from_route(&Route::OrderDetails { id: None });

        let err = page.load(&mut store).await.unwrap_err();

        assert_eq!(err.message, MISSING_ID);
        assert!(mock.requests().is_empty());
        assert_eq!(OrderDetailsPage::render(&store, "LKR"), "Loading...");
    }
}
