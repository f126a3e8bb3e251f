//! Customer slice and its thunks.

use barista_core::search;
use barista_core::{Customer, CustomerDraft};
use tracing::info;

use super::{RecordList, Store};
use crate::error::ClientResult;

/// Fetched customers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerSlice {
    list: RecordList<Customer>,
}

impl CustomerSlice {
    pub fn all(&self) -> &[Customer] {
        self.list.all()
    }

    pub fn find(&self, id: &str) -> Option<&Customer> {
        self.list.find(id)
    }

    /// Name, email or telephone containing `term`.
    pub fn search(&self, term: &str) -> Vec<&Customer> {
        search::filter(self.list.all(), term)
    }
}

impl Store {
    pub async fn fetch_customers(&mut self) -> ClientResult<()> {
        let customers = self.api.customers().list().await?;
        info!(count = customers.len(), "Customers fetched");
        self.customers.list.replace_all(customers);
        Ok(())
    }

    pub async fn add_customer(&mut self, draft: &CustomerDraft) -> ClientResult<Customer> {
        let customer = self.api.customers().create(draft).await?;
        info!(customer_id = %customer.id, "Customer added");
        self.customers.list.push(customer.clone());
        Ok(customer)
    }

    pub async fn update_customer(
        &mut self,
        id: &str,
        draft: &CustomerDraft,
    ) -> ClientResult<Customer> {
        let customer = self.api.customers().update(id, draft).await?;
        info!(customer_id = %customer.id, "Customer updated");
        self.customers.list.replace(customer.clone());
        Ok(customer)
    }

    pub async fn delete_customer(&mut self, id: &str) -> ClientResult<()> {
        self.api.customers().delete(id).await?;
        info!(customer_id = id, "Customer deleted");
        self.customers.list.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::mock_store;
    use barista_core::CustomerDraft;
    use serde_json::json;

    fn jane() -> serde_json::Value {
        json!({"_id": "c-1", "name": "Jane", "email": "jane@example.com", "telephone": "0771234567"})
    }

    #[tokio::test]
    async fn test_fetch_replaces_list() {
        let (mut store, mock) = mock_store();
        mock.respond(json!([jane()]));
        mock.respond(json!([]));

        store.fetch_customers().await.unwrap();
        assert_eq!(store.customers().all().len(), 1);

        store.fetch_customers().await.unwrap();
        assert!(store.customers().all().is_empty());
    }

    #[tokio::test]
    async fn test_add_update_delete() {
        let (mut store, mock) = mock_store();
        mock.respond(jane());
        mock.respond(json!({"_id": "c-1", "name": "Jane Perera", "email": "jane@example.com", "telephone": "0771234567"}));
        mock.respond(json!({}));

        store.add_customer(&CustomerDraft::default()).await.unwrap();
        assert_eq!(store.customers().find("c-1").unwrap().name, "Jane");

        store
            .update_customer("c-1", &CustomerDraft::default())
            .await
            .unwrap();
        assert_eq!(store.customers().find("c-1").unwrap().name, "Jane Perera");
        assert_eq!(store.customers().search("perera").len(), 1);

        store.delete_customer("c-1").await.unwrap();
        assert!(store.customers().find("c-1").is_none());
    }

    #[tokio::test]
    async fn test_rejected_leaves_slice_untouched() {
        let (mut store, mock) = mock_store();
        mock.respond(json!([jane()]));
        store.fetch_customers().await.unwrap();

        let err = store.delete_customer("c-1").await.unwrap_err();

        assert_eq!(err.to_string(), "failed to delete customer");
        assert_eq!(store.customers().all().len(), 1);
    }
}
