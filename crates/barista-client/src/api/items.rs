//! Menu item endpoints.

use barista_core::{Item, ItemDraft};

use super::ApiClient;
use crate::error::ClientResult;
use crate::transport::Method;

/// Handle for `/items`.
#[derive(Debug, Clone, Copy)]
pub struct ItemApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ItemApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        ItemApi { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Item>> {
        self.client
            .get(
                &self.client.endpoints().items,
                "fetch items",
                "Failed to fetch items",
            )
            .await
    }

    pub async fn create(&self, draft: &ItemDraft) -> ClientResult<Item> {
        self.client
            .request(
                Method::Post,
                &self.client.endpoints().items,
                Some(draft),
                "add item",
                "Failed to add item",
            )
            .await
    }

    pub async fn update(&self, id: &str, draft: &ItemDraft) -> ClientResult<Item> {
        self.client
            .request(
                Method::Put,
                &self.client.endpoints().item(id),
                Some(draft),
                "update item",
                "Failed to update item",
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .delete(
                &self.client.endpoints().item(id),
                "delete item",
                "Failed to delete item",
            )
            .await
    }
}
