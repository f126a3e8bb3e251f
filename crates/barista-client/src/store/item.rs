//! Item slice and its thunks.

use barista_core::search;
use barista_core::{Item, ItemCategory, ItemDraft, ITEM_CATEGORIES};
use tracing::info;

use super::{RecordList, Store};
use crate::error::ClientResult;

/// Fetched menu items plus the fixed category list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSlice {
    list: RecordList<Item>,
}

impl ItemSlice {
    pub fn all(&self) -> &[Item] {
        self.list.all()
    }

    pub fn find(&self, id: &str) -> Option<&Item> {
        self.list.find(id)
    }

    /// Name or category containing `term`.
    pub fn search(&self, term: &str) -> Vec<&Item> {
        search::filter(self.list.all(), term)
    }

    /// Categories offered by the item form; the first is the default.
    pub fn categories(&self) -> &'static [ItemCategory] {
        &ITEM_CATEGORIES
    }
}

impl Store {
    pub async fn fetch_items(&mut self) -> ClientResult<()> {
        let items = self.api.items().list().await?;
        info!(count = items.len(), "Items fetched");
        self.items.list.replace_all(items);
        Ok(())
    }

    pub async fn add_item(&mut self, draft: &ItemDraft) -> ClientResult<Item> {
        let item = self.api.items().create(draft).await?;
        info!(item_id = %item.id, "Item added");
        self.items.list.push(item.clone());
        Ok(item)
    }

    pub async fn update_item(&mut self, id: &str, draft: &ItemDraft) -> ClientResult<Item> {
        let item = self.api.items().update(id, draft).await?;
        info!(item_id = %item.id, "Item updated");
        self.items.list.replace(item.clone());
        Ok(item)
    }

    pub async fn delete_item(&mut self, id: &str) -> ClientResult<()> {
        self.api.items().delete(id).await?;
        info!(item_id = id, "Item deleted");
        self.items.list.remove(id);
        Ok(())
    }
}
