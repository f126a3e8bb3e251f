//! Customer endpoints.

use barista_core::{Customer, CustomerDraft};

use super::ApiClient;
use crate::error::ClientResult;
use crate::transport::Method;

/// Handle for `/customers`.
#[derive(Debug, Clone, Copy)]
pub struct CustomerApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CustomerApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        CustomerApi { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Customer>> {
        self.client
            .get(
                &self.client.endpoints().customers,
                "fetch customers",
                "failed to fetch customers",
            )
            .await
    }

    /// Returns the stored record, including its server-assigned id.
    pub async fn create(&self, draft: &CustomerDraft) -> ClientResult<Customer> {
        self.client
            .request(
                Method::Post,
                &self.client.endpoints().customers,
                Some(draft),
                "add customer",
                "failed to add customer",
            )
            .await
    }

    pub async fn update(&self, id: &str, draft: &CustomerDraft) -> ClientResult<Customer> {
        self.client
            .request(
                Method::Put,
                &self.client.endpoints().customer(id),
                Some(draft),
                "update customer",
                "failed to update customer",
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .delete(
                &self.client.endpoints().customer(id),
                "delete customer",
                "failed to delete customer",
            )
            .await
    }
}
