//! # Customers Page
//!
//! ## Modal Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  closed ──open_new()──────────► open (blank draft, not editing)        │
//! │    ▲    ──open_edit(customer)─► open (draft = customer, editing id)    │
//! │    │                                 │                                  │
//! │    │                            submit()                                │
//! │    │                                 │                                  │
//! │    │        ┌── fields missing ──────┤                                  │
//! │    │        │   alert, stay open     │                                  │
//! │    │        ▼                        ▼                                  │
//! │    │     (open)              add or update customer                     │
//! │    │                                 │                                  │
//! │    └────────── close() ◄─────────────┘ then refetch the list            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use barista_client::Store;
use barista_core::validation::validate_customer_draft;
use barista_core::{Customer, CustomerDraft};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::notify::Notifier;
use crate::render;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this customer?";

/// Add/edit form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerModal {
    open: bool,
    draft: CustomerDraft,
    /// Id of the customer being edited; `None` when adding.
    editing: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CustomersPage {
    search: String,
    modal: CustomerModal,
}

impl CustomersPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&self, store: &mut Store) -> AppResult<()> {
        store.fetch_customers().await?;
        Ok(())
    }

    // =========================================================================
    // Search
    // =========================================================================

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Customers matching the current search term.
    pub fn visible<'s>(&self, store: &'s Store) -> Vec<&'s Customer> {
        store.customers().search(&self.search)
    }

    // =========================================================================
    // Modal
    // =========================================================================

    pub fn open_new(&mut self) {
        self.modal = CustomerModal {
            open: true,
            ..CustomerModal::default()
        };
    }

    pub fn open_edit(&mut self, customer: &Customer) {
        self.modal = CustomerModal {
            open: true,
            draft: CustomerDraft::from(customer),
            editing: Some(customer.id.clone()),
        };
    }

    pub fn close(&mut self) {
        self.modal = CustomerModal::default();
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.open
    }

    pub fn is_editing(&self) -> bool {
        self.modal.editing.is_some()
    }

    pub fn draft(&self) -> &CustomerDraft {
        &self.modal.draft
    }

    pub fn draft_mut(&mut self) -> &mut CustomerDraft {
        &mut self.modal.draft
    }

    /// Saves the modal's draft.
    ///
    /// On a validation failure nothing is sent and the modal stays open.
    pub async fn submit(&mut self, store: &mut Store) -> AppResult<Customer> {
        validate_customer_draft(&self.modal.draft)?;

        let saved = match &self.modal.editing {
            Some(id) => store.update_customer(id, &self.modal.draft).await?,
            None => store.add_customer(&self.modal.draft).await?,
        };

        self.close();
        store.fetch_customers().await?;
        Ok(saved)
    }

    /// Deletes after confirmation. Returns false if the admin declined.
    pub async fn delete(
        &mut self,
        store: &mut Store,
        notifier: &dyn Notifier,
        id: &str,
    ) -> AppResult<bool> {
        if !notifier.confirm(DELETE_CONFIRMATION, None)? {
            debug!(customer_id = id, "Delete cancelled");
            return Ok(false);
        }

        store.delete_customer(id).await?;
        info!(customer_id = id, "Customer removed");
        store.fetch_customers().await?;
        Ok(true)
    }

    pub fn render(&self, store: &Store) -> String {
        render::customers_table(&self.visible(store)).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ScriptedNotifier;
    use barista_client::testing::mock_store;
    use barista_client::Method;
    use serde_json::json;

    fn jane() -> serde_json::Value {
        json!({"_id": "c-1", "name": "Jane", "email": "jane@example.com", "telephone": "0771234567"})
    }

    #[tokio::test]
    async fn test_add_closes_modal_and_refetches() {
        let (mut store, mock) = mock_store();
        mock.respond(jane()).respond(json!([jane()]));

        let mut page = CustomersPage::new();
        page.open_new();
        *page.draft_mut() = CustomerDraft {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            telephone: "0771234567".into(),
        };

        let saved = page.submit(&mut store).await.unwrap();

        assert_eq!(saved.id, "c-1");
        assert!(!page.is_modal_open());
        assert_eq!(mock.requests_to(Method::Post, "/customers").len(), 1);
        assert_eq!(mock.requests_to(Method::Get, "/customers").len(), 1);
        assert_eq!(page.visible(&store).len(), 1);
    }

    #[tokio::test]
    async fn test_incomplete_form_stays_open() {
        let (mut store, mock) = mock_store();
        let mut page = CustomersPage::new();
        page.open_new();
        page.draft_mut().name = "Jane".into();

        let err = page.submit(&mut store).await.unwrap_err();

        assert_eq!(err.message, "Please fill all fields");
        assert!(page.is_modal_open());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_edit_sends_put() {
        let (mut store, mock) = mock_store();
        mock.respond(json!([jane()]));
        store.fetch_customers().await.unwrap();

        let mut page = CustomersPage::new();
        let customer = store.customers().find("c-1").unwrap().clone();
        page.open_edit(&customer);
        assert!(page.is_editing());
        page.draft_mut().telephone = "0110000000".into();

        mock.respond(json!({"_id": "c-1", "name": "Jane", "email": "jane@example.com", "telephone": "0110000000"}))
            .respond(json!([]));
        page.submit(&mut store).await.unwrap();

        let puts = mock.requests_to(Method::Put, "/customers/c-1");
        assert_eq!(puts.len(), 1);
        assert_eq!(
            puts[0].body.as_ref().and_then(|b| b.get("telephone")).cloned(),
            Some(json!("0110000000"))
        );
        assert!(!page.is_editing());
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let (mut store, mock) = mock_store();
        let mut page = CustomersPage::new();

        let declined = ScriptedNotifier::answering(false);
        assert!(!page.delete(&mut store, &declined, "c-1").await.unwrap());
        assert!(mock.requests().is_empty());
        assert_eq!(declined.confirms.borrow()[0].0, DELETE_CONFIRMATION);

        let accepted = ScriptedNotifier::answering(true);
        mock.respond(json!({})).respond(json!([]));
        assert!(page.delete(&mut store, &accepted, "c-1").await.unwrap());
        assert_eq!(mock.requests_to(Method::Delete, "/customers/c-1").len(), 1);
        assert_eq!(mock.requests_to(Method::Get, "/customers").len(), 1);
    }

    #[tokio::test]
    async fn test_search_filters_visible() {
        let (mut store, mock) = mock_store();
        mock.respond(json!([
            jane(),
            {"_id": "c-2", "name": "Namal", "email": "namal@gmail.com", "telephone": "0719999999"}
        ]));
        let page_loader = CustomersPage::new();
        page_loader.load(&mut store).await.unwrap();

        let mut page = CustomersPage::new();
        page.set_search("GMAIL");
        let names: Vec<&str> = page.visible(&store).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Namal"]);
        assert!(page.render(&store).contains("namal@gmail.com"));
    }
}
