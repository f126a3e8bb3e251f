//! # Items Page
//!
//! Same modal lifecycle as the customers page. A new-item form starts on the
//! first category with a price of zero, and deletes are confirmed with a
//! warning before anything is sent.

use barista_client::Store;
use barista_core::validation::validate_item_draft;
use barista_core::{Item, ItemCategory, ItemDraft};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::notify::Notifier;
use crate::render;

pub const DELETE_TITLE: &str = "Delete Item?";
pub const DELETE_WARNING: &str = "This action cannot be undone!";
pub const DELETED: &str = "Deleted!";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemModal {
    open: bool,
    draft: ItemDraft,
    editing: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ItemsPage {
    search: String,
    modal: ItemModal,
}

impl ItemsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&self, store: &mut Store) -> AppResult<()> {
        store.fetch_items().await?;
        Ok(())
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn visible<'s>(&self, store: &'s Store) -> Vec<&'s Item> {
        store.items().search(&self.search)
    }

    /// Choices for the category field; the first is the default.
    pub fn categories(store: &Store) -> &'static [ItemCategory] {
        store.items().categories()
    }

    pub fn open_new(&mut self) {
        self.modal = ItemModal {
            open: true,
            ..ItemModal::default()
        };
    }

    pub fn open_edit(&mut self, item: &Item) {
        self.modal = ItemModal {
            open: true,
            draft: ItemDraft::from(item),
            editing: Some(item.id.clone()),
        };
    }

    pub fn close(&mut self) {
        self.modal = ItemModal::default();
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.open
    }

    pub fn is_editing(&self) -> bool {
        self.modal.editing.is_some()
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.modal.draft
    }

    pub fn draft_mut(&mut self) -> &mut ItemDraft {
        &mut self.modal.draft
    }

    pub async fn submit(&mut self, store: &mut Store) -> AppResult<Item> {
        validate_item_draft(&self.modal.draft)?;

        let saved = match &self.modal.editing {
            Some(id) => store.update_item(id, &self.modal.draft).await?,
            None => store.add_item(&self.modal.draft).await?,
        };

        self.close();
        store.fetch_items().await?;
        Ok(saved)
    }

    /// Deletes after confirmation and shows "Deleted!" once the list is
    /// refreshed.
    pub async fn delete(
        &mut self,
        store: &mut Store,
        notifier: &dyn Notifier,
        id: &str,
    ) -> AppResult<bool> {
        if !notifier.confirm(DELETE_TITLE, Some(DELETE_WARNING))? {
            debug!(item_id = id, "Delete cancelled");
            return Ok(false);
        }

        store.delete_item(id).await?;
        store.fetch_items().await?;
        info!(item_id = id, "Item removed");
        notifier.notice(DELETED);
        Ok(true)
    }

    pub fn render(&self, store: &Store, currency: &str) -> String {
        render::items_table(&self.visible(store), currency).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ScriptedNotifier;
    use barista_client::testing::mock_store;
    use barista_client::{Method, TransportError};
    use barista_core::Money;
    use serde_json::json;

    #[test]
    fn test_new_form_defaults() {
        let (store, _) = mock_store();
        let mut page = ItemsPage::new();
        page.open_new();

        assert_eq!(page.draft().category, ItemsPage::categories(&store)[0]);
        assert_eq!(page.draft().category, ItemCategory::Cake);
        assert_eq!(page.draft().price, Money::zero());
        assert!(!page.is_editing());
    }

    #[tokio::test]
    async fn test_blank_name_rejected_locally() {
        let (mut store, mock) = mock_store();
        let mut page = ItemsPage::new();
        page.open_new();

        let err = page.submit(&mut store).await.unwrap_err();

        assert_eq!(err.message, "Please fill all the fields");
        assert!(page.is_modal_open());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_add_item() {
        let (mut store, mock) = mock_store();
        let latte = json!({"_id": "i-1", "name": "Latte", "category": "Beverage", "price": 350});
        mock.respond(latte.clone()).respond(json!([latte]));

        let mut page = ItemsPage::new();
        page.open_new();
        page.draft_mut().name = "Latte".into();
        page.draft_mut().category = ItemCategory::Beverage;
        page.draft_mut().price = Money::from_major_minor(350, 0);

        let item = page.submit(&mut store).await.unwrap();

        assert_eq!(item.name, "Latte");
        assert!(!page.is_modal_open());
        assert_eq!(
            mock.requests_to(Method::Post, "/items")[0]
                .body
                .as_ref()
                .and_then(|b| b.get("price"))
                .cloned(),
            Some(json!(350))
        );
        assert!(page.render(&store, "LKR").contains("LKR 350.00"));
    }

    #[tokio::test]
    async fn test_confirmed_delete_notifies() {
        let (mut store, mock) = mock_store();
        mock.respond(json!({})).respond(json!([]));
        let notifier = ScriptedNotifier::answering(true);

        let mut page = ItemsPage::new();
        assert!(page.delete(&mut store, &notifier, "i-1").await.unwrap());

        let (title, detail) = notifier.confirms.borrow()[0].clone();
        assert_eq!(title, "Delete Item?");
        assert_eq!(detail.as_deref(), Some("This action cannot be undone!"));
        assert_eq!(notifier.last_notice().as_deref(), Some("Deleted!"));
        assert_eq!(mock.requests_to(Method::Delete, "/items/i-1").len(), 1);
    }

    #[tokio::test]
    async fn test_failed_delete_has_no_notice() {
        let (mut store, mock) = mock_store();
        mock.fail(TransportError::Network("refused".into()));
        let notifier = ScriptedNotifier::answering(true);

        let err = ItemsPage::new()
            .delete(&mut store, &notifier, "i-1")
            .await
            .unwrap_err();

        assert_eq!(err.message, "Failed to delete item");
        assert!(notifier.notices.borrow().is_empty());
    }
}
