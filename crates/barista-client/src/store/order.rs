//! Order slice and its thunks.

use barista_core::search;
use barista_core::{NewOrder, Order};
use tracing::info;

use super::{RecordList, Store};
use crate::error::ClientResult;

/// Fetched orders and the order open on the details page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSlice {
    list: RecordList<Order>,
    selected: Option<Order>,
}

impl OrderSlice {
    pub fn all(&self) -> &[Order] {
        self.list.all()
    }

    pub fn find(&self, id: &str) -> Option<&Order> {
        self.list.find(id)
    }

    /// Customer name, order id or date containing `term`.
    pub fn search(&self, term: &str) -> Vec<&Order> {
        search::filter(self.list.all(), term)
    }

    pub fn selected(&self) -> Option<&Order> {
        self.selected.as_ref()
    }
}

impl Store {
    pub async fn fetch_orders(&mut self) -> ClientResult<()> {
        let orders = self.api.orders().list().await?;
        info!(count = orders.len(), "Orders fetched");
        self.orders.list.replace_all(orders);
        Ok(())
    }

    /// Fetches one order and makes it the selected order.
    pub async fn fetch_order(&mut self, id: &str) -> ClientResult<&Order> {
        let order = self.api.orders().get(id).await?;
        info!(order_id = %order.id, "Order fetched");
        Ok(self.orders.selected.insert(order))
    }

    pub async fn create_order(&mut self, order: &NewOrder) -> ClientResult<Order> {
        let created = self.api.orders().create(order).await?;
        info!(order_id = %created.id, total = %created.total, "Order created");
        self.orders.list.push(created.clone());
        Ok(created)
    }
}
