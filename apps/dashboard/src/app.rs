//! # Command Dispatch
//!
//! Turns one parsed [`Command`] into a guarded page visit.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command ──► route it belongs to ──► layout::resolve (auth guard)      │
//! │                                          │                              │
//! │                  ┌── redirected ─────────┤                              │
//! │                  ▼                       ▼                              │
//! │        render the guard's route    run the page action                 │
//! │        (login form / dashboard)          │                              │
//! │                                          ▼                              │
//! │                            rendered page text, or AppError             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use barista_client::{Route, Store};
use barista_core::validation::validate_quantity;
use barista_core::{CartAction, CustomerDraft, ItemDraft, Money};
use tracing::{debug, info};

use crate::cli::{parse_cart_entry, Command, CustomerCommand, ItemCommand, OrderCommand};
use crate::error::{AppError, AppResult};
use crate::layout;
use crate::notify::Notifier;
use crate::pages::{
    CustomersPage, DashboardPage, ItemsPage, LoginPage, OrderDetailsPage, OrdersPage, SignupPage,
};

/// Page layer bound to one store and one notifier.
pub struct App<'a> {
    store: Store,
    notifier: &'a dyn Notifier,
    currency: String,
}

impl<'a> App<'a> {
    pub fn new(store: Store, notifier: &'a dyn Notifier, currency: impl Into<String>) -> Self {
        App {
            store,
            notifier,
            currency: currency.into(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Runs `command`; with no command the dashboard is shown.
    pub async fn execute(&mut self, command: Option<Command>) -> AppResult<String> {
        let command = command.unwrap_or(Command::Dashboard);

        if let Some(requested) = route_of(&command)? {
            let resolved = layout::resolve(&self.store, requested.clone());
            if resolved != requested {
                info!(from = %requested, to = %resolved, "Redirecting");
                let page = self.visit(resolved.clone()).await?;
                return Ok(format!("Redirected to {}\n\n{}", resolved, page));
            }
        }

        match command {
            Command::Login { email, password } => {
                let page = LoginPage::new(
                    self.value_or_prompt(email, "Email", false)?,
                    self.value_or_prompt(password, "Password", true)?,
                );
                let next = page.submit(&mut self.store).await?;
                self.visit(next).await
            }
            Command::Signup {
                name,
                email,
                password,
                confirm_password,
            } => {
                let mut page = SignupPage {
                    name: self.value_or_prompt(name, "Name", false)?,
                    email: self.value_or_prompt(email, "Email", false)?,
                    password: self.value_or_prompt(password, "Password", true)?,
                    confirm_password: self.value_or_prompt(
                        confirm_password,
                        "Confirm password",
                        true,
                    )?,
                    ..SignupPage::default()
                };
                let next = page.submit(&mut self.store).await?;
                self.visit(next).await
            }
            Command::Logout => {
                let next = layout::logout(&mut self.store)?;
                Ok(format!("Signed out. Next: {}", next))
            }
            Command::Dashboard => self.visit(Route::Dashboard).await,
            Command::Customers { action } => self.customers(action).await,
            Command::Items { action } => self.items(action).await,
            Command::Orders { action } => self.orders(action).await,
            Command::Open { route } => self.visit(route.parse::<Route>()?).await,
        }
    }

    /// Renders the page behind `route` inside the sidebar frame.
    async fn visit(&mut self, route: Route) -> AppResult<String> {
        debug!(route = %route, "Visiting");
        let body = match &route {
            Route::Dashboard => {
                let mut page = DashboardPage::new();
                page.load(&mut self.store).await?;
                page.render(&self.currency)
            }
            Route::Customers => {
                let page = CustomersPage::new();
                page.load(&mut self.store).await?;
                page.render(&self.store)
            }
            Route::Items => {
                let page = ItemsPage::new();
                page.load(&mut self.store).await?;
                page.render(&self.store, &self.currency)
            }
            Route::Orders => {
                let page = OrdersPage::new();
                page.load(&mut self.store).await?;
                page.render(&self.store, &self.currency)
            }
            Route::OrderDetails { .. } => {
                OrderDetailsPage::from_route(&route)
                    .load(&mut self.store)
                    .await?;
                OrderDetailsPage::render(&self.store, &self.currency)
            }
            Route::Login => {
                let page = LoginPage::new(
                    self.notifier.prompt("Email", false)?,
                    self.notifier.prompt("Password", true)?,
                );
                let next = page.submit(&mut self.store).await?;
                return Box::pin(self.visit(next)).await;
            }
            Route::Signup => return Ok("Run `barista signup` to create an account.".to_string()),
        };

        let user = self.store.auth().email().map(str::to_string);
        Ok(format!(
            "{}\n{}",
            layout::sidebar(&route, user.as_deref()),
            body
        ))
    }

    fn value_or_prompt(
        &self,
        value: Option<String>,
        label: &str,
        secret: bool,
    ) -> AppResult<String> {
        match value {
            Some(value) => Ok(value),
            None => self.notifier.prompt(label, secret),
        }
    }

    // =========================================================================
    // Customers
    // =========================================================================

    async fn customers(&mut self, action: Option<CustomerCommand>) -> AppResult<String> {
        let mut page = CustomersPage::new();

        match action.unwrap_or(CustomerCommand::List {
            search: String::new(),
        }) {
            CustomerCommand::List { search } => {
                page.load(&mut self.store).await?;
                page.set_search(search);
                Ok(page.render(&self.store))
            }
            CustomerCommand::Add(fields) => {
                page.open_new();
                *page.draft_mut() = CustomerDraft {
                    name: fields.name,
                    email: fields.email,
                    telephone: fields.telephone,
                };
                let saved = page.submit(&mut self.store).await?;
                Ok(format!("Added customer {}\n{}", saved.id, page.render(&self.store)))
            }
            CustomerCommand::Edit { id, fields } => {
                page.load(&mut self.store).await?;
                let current = self
                    .store
                    .customers()
                    .find(&id)
                    .cloned()
                    .ok_or_else(|| AppError::not_found("Customer", &id))?;
                page.open_edit(&current);

                let draft = page.draft_mut();
                if let Some(name) = fields.name {
                    draft.name = name;
                }
                if let Some(email) = fields.email {
                    draft.email = email;
                }
                if let Some(telephone) = fields.telephone {
                    draft.telephone = telephone;
                }

                let saved = page.submit(&mut self.store).await?;
                Ok(format!("Updated customer {}\n{}", saved.id, page.render(&self.store)))
            }
            CustomerCommand::Delete { id } => {
                if page.delete(&mut self.store, self.notifier, &id).await? {
                    Ok(page.render(&self.store))
                } else {
                    Ok("Cancelled".to_string())
                }
            }
        }
    }

    // =========================================================================
    // Items
    // =========================================================================

    async fn items(&mut self, action: Option<ItemCommand>) -> AppResult<String> {
        let mut page = ItemsPage::new();

        match action.unwrap_or(ItemCommand::List {
            search: String::new(),
        }) {
            ItemCommand::List { search } => {
                page.load(&mut self.store).await?;
                page.set_search(search);
                Ok(page.render(&self.store, &self.currency))
            }
            ItemCommand::Add(fields) => {
                page.open_new();
                let draft = page.draft_mut();
                draft.name = fields.name;
                if let Some(category) = fields.category {
                    draft.category = category;
                }
                draft.price = Money::from_decimal(fields.price);
                draft.image = fields.image;
                draft.remark = fields.remark;

                let saved = page.submit(&mut self.store).await?;
                Ok(format!(
                    "Added item {}\n{}",
                    saved.id,
                    page.render(&self.store, &self.currency)
                ))
            }
            ItemCommand::Edit { id, fields } => {
                page.load(&mut self.store).await?;
                let current = self
                    .store
                    .items()
                    .find(&id)
                    .cloned()
                    .ok_or_else(|| AppError::not_found("Item", &id))?;
                page.open_edit(&current);

                let draft: &mut ItemDraft = page.draft_mut();
                if let Some(name) = fields.name {
                    draft.name = name;
                }
                if let Some(category) = fields.category {
                    draft.category = category;
                }
                if let Some(price) = fields.price {
                    draft.price = Money::from_decimal(price);
                }
                if fields.image.is_some() {
                    draft.image = fields.image;
                }
                if fields.remark.is_some() {
                    draft.remark = fields.remark;
                }

                let saved = page.submit(&mut self.store).await?;
                Ok(format!(
                    "Updated item {}\n{}",
                    saved.id,
                    page.render(&self.store, &self.currency)
                ))
            }
            ItemCommand::Delete { id } => {
                if page.delete(&mut self.store, self.notifier, &id).await? {
                    Ok(page.render(&self.store, &self.currency))
                } else {
                    Ok("Cancelled".to_string())
                }
            }
        }
    }

    // =========================================================================
    // Orders
    // =========================================================================

    async fn orders(&mut self, action: Option<OrderCommand>) -> AppResult<String> {
        let mut page = OrdersPage::new();

        match action.unwrap_or(OrderCommand::List {
            search: String::new(),
        }) {
            OrderCommand::List { search } => {
                page.load(&mut self.store).await?;
                page.set_search(search);
                Ok(page.render(&self.store, &self.currency))
            }
            OrderCommand::Show { id } => self.visit(page.view_details(&id)).await,
            OrderCommand::New { customer, items } => {
                let entries = cart_entries(&items)?;
                page.load(&mut self.store).await?;
                page.open_cart();

                if let Some(customer) = customer {
                    page.select_customer(&mut self.store, &customer);
                }
                for (item_id, quantity) in entries {
                    page.add_to_cart(&mut self.store, &item_id)?;
                    if quantity != 1 {
                        self.store.dispatch(CartAction::SetQuantity {
                            item_id: item_id.clone(),
                            quantity,
                        });
                    }
                }

                let cart = page.render(&self.store, &self.currency);
                let next = page.create_order(&mut self.store, self.notifier).await?;
                let landing = self.visit(next).await?;
                Ok(format!("{}\n\n{}", cart, landing))
            }
            OrderCommand::Status { id, status } => {
                page.change_status(&id, status);
                Ok(format!("Order {} unchanged", id))
            }
        }
    }
}

/// Parses `--item` entries, summing repeated ids in first-seen order.
///
/// Every entry and every summed quantity must lie within the cart's bounds.
fn cart_entries(entries: &[String]) -> AppResult<Vec<(String, i64)>> {
    let mut lines: Vec<(String, i64)> = Vec::new();

    for entry in entries {
        let (item_id, quantity) = parse_cart_entry(entry).map_err(AppError::validation)?;
        validate_quantity(quantity)?;

        match lines.iter_mut().find(|(id, _)| *id == item_id) {
            Some((_, total)) => {
                *total = total.saturating_add(quantity);
                validate_quantity(*total)?;
            }
            None => lines.push((item_id, quantity)),
        }
    }
    Ok(lines)
}

/// The route a command belongs to, for the auth guard. Logout is never
/// guarded.
fn route_of(command: &Command) -> AppResult<Option<Route>> {
    Ok(Some(match command {
        Command::Logout => return Ok(None),
        Command::Login { .. } => Route::Login,
        Command::Signup { .. } => Route::Signup,
        Command::Dashboard => Route::Dashboard,
        Command::Customers { .. } => Route::Customers,
        Command::Items { .. } => Route::Items,
        Command::Orders {
            action: Some(OrderCommand::Show { id }),
        } => Route::order_details(id.as_str()),
        Command::Orders { .. } => Route::Orders,
        Command::Open { route } => route.parse::<Route>()?,
    }))
}
