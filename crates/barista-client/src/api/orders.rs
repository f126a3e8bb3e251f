//! Order endpoints. Orders are never updated or deleted by the client.

use barista_core::{NewOrder, Order};

use super::ApiClient;
use crate::error::ClientResult;
use crate::transport::Method;

/// Handle for `/orders`.
#[derive(Debug, Clone, Copy)]
pub struct OrderApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OrderApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        OrderApi { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Order>> {
        self.client
            .get(
                &self.client.endpoints().orders,
                "fetch orders",
                "failed to fetch orders",
            )
            .await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Order> {
        self.client
            .get(
                &self.client.endpoints().order(id),
                "fetch order",
                "failed to fetch order",
            )
            .await
    }

    pub async fn create(&self, order: &NewOrder) -> ClientResult<Order> {
        self.client
            .request(
                Method::Post,
                &self.client.endpoints().orders,
                Some(order),
                "create order",
                "failed to create order",
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;
    use crate::testing::MockTransport;
    use barista_core::OrderStatus;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_populated_order() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(json!({
            "_id": "o-1",
            "customerId": {"_id": "c-1", "name": "Jane", "email": "j@x.lk", "telephone": "077"},
            "status": "preparing",
            "total": 700,
            "orderItems": [{"itemId": "i-1", "quantity": 2, "price": 350}]
        }));
        let api = ApiClient::new(mock.clone(), Endpoints::default());

        let order = api.orders().get("o-1").await.unwrap();

        assert_eq!(order.customer_name(), Some("Jane"));
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(mock.requests()[0].path, "/orders/o-1");
        assert_eq!(mock.requests()[0].method, Method::Get);
    }

    #[tokio::test]
    async fn test_list_failure() {
        let mock = Arc::new(MockTransport::new());
        mock.fail(crate::error::TransportError::Network("refused".into()));
        let api = ApiClient::new(mock.clone(), Endpoints::default());

        let err = api.orders().list().await.unwrap_err();
        assert_eq!(err.to_string(), "failed to fetch orders");
    }
}
