//! # Domain Types
//!
//! Core domain types shared by the client and the dashboard.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │      Item       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  _id            │   │  _id            │   │  _id            │       │
//! │  │  name           │   │  name           │   │  customerId ────┼──► Customer
//! │  │  email          │   │  category       │   │  date           │       │
//! │  │  telephone      │   │  price          │   │  status         │       │
//! │  └─────────────────┘   │  image, remark  │   │  total          │       │
//! │                        └─────────────────┘   │  orderItems ─┐  │       │
//! │                                              └──────────────┼──┘       │
//! │                                                             ▼          │
//! │                                              ┌─────────────────┐       │
//! │                                              │   OrderItem     │       │
//! │                                              │  itemId ────────┼──► Item
//! │                                              │  quantity       │       │
//! │                                              │  price snapshot │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Conventions
//! - Field names are camelCase on the wire.
//! - Identifiers arrive as `_id` from the backend; `id` is accepted too.
//! - References (`customerId`, `itemId`) arrive either as a bare id or as the
//!   embedded document, see [`Reference`].
//! - Money fields are JSON decimals, see [`crate::money::decimal`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::{self, Money};

// =============================================================================
// Identity
// =============================================================================

/// Anything that carries a backend identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A reference to another record: either the bare id or the embedded document.
///
/// The backend populates some references (an order's `customerId` carries the
/// whole customer) and leaves others as plain ids. Both decode here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Id(String),
    Embedded(T),
}

impl<T: Identified> Reference<T> {
    /// The referenced id, whichever form arrived.
    pub fn id(&self) -> &str {
        match self {
            Reference::Id(id) => id,
            Reference::Embedded(doc) => doc.id(),
        }
    }

    /// The embedded document, if the backend populated it.
    pub fn embedded(&self) -> Option<&T> {
        match self {
            Reference::Id(_) => None,
            Reference::Embedded(doc) => Some(doc),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A café customer.
///
/// Only the id is required. Orders embed whatever subset of the customer the
/// backend populated, and missing fields decode as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub telephone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /customers` and `PUT /customers/:id`.
///
/// Doubles as the edit buffer of the customer form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub telephone: String,
}

impl From<&Customer> for CustomerDraft {
    fn from(customer: &Customer) -> Self {
        CustomerDraft {
            name: customer.name.clone(),
            email: customer.email.clone(),
            telephone: customer.telephone.clone(),
        }
    }
}

// =============================================================================
// Item Category
// =============================================================================

/// Menu category.
///
/// The item form offers the four named categories. Stored items may carry
/// anything, so decoding is case-insensitive and keeps unrecognised values
/// in [`ItemCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemCategory {
    Cake,
    Beverage,
    Dessert,
    Pastry,
    Other(String),
}

impl ItemCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ItemCategory::Cake => "Cake",
            ItemCategory::Beverage => "Beverage",
            ItemCategory::Dessert => "Dessert",
            ItemCategory::Pastry => "Pastry",
            ItemCategory::Other(name) => name,
        }
    }

    /// Like [`FromStr`], but never fails.
    pub fn from_wire(raw: &str) -> Self {
        raw.parse()
            .unwrap_or_else(|_| ItemCategory::Other(raw.trim().to_string()))
    }
}

impl Default for ItemCategory {
    fn default() -> Self {
        crate::ITEM_CATEGORIES[0].clone()
    }
}

impl Serialize for ItemCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemCategory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ItemCategory::from_wire(&raw))
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = CoreError;

    /// Accepts the four form categories only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cake" => Ok(ItemCategory::Cake),
            "beverage" => Ok(ItemCategory::Beverage),
            "dessert" => Ok(ItemCategory::Dessert),
            "pastry" => Ok(ItemCategory::Pastry),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A menu item.
///
/// As with [`Customer`], only the id is required so partly populated
/// `itemId` references still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category: ItemCategory,

    /// Unit price, decimal on the wire.
    #[serde(with = "money::decimal", default)]
    pub price: Money,

    /// Image URL; the dashboard falls back to a placeholder when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Item {
    /// Creates an item without image or remark.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ItemCategory,
        price: Money,
    ) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            category,
            price,
            image: None,
            remark: None,
        }
    }
}

impl Identified for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /items` and `PUT /items/:id`; the item form's edit buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,

    pub category: ItemCategory,

    #[serde(with = "money::decimal")]
    pub price: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// A blank form: empty name, first category, price 0.
impl Default for ItemDraft {
    fn default() -> Self {
        ItemDraft {
            name: String::new(),
            category: ItemCategory::default(),
            price: Money::zero(),
            image: None,
            remark: None,
        }
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        ItemDraft {
            name: item.name.clone(),
            category: item.category.clone(),
            price: item.price,
            image: item.image.clone(),
            remark: item.remark.clone(),
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Order lifecycle status.
///
/// ```text
/// pending ──► preparing ──► completed
///    │            │
///    └────────────┴──────► cancelled
/// ```
///
/// The client only displays the status; transitions are owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Capitalized label used in tables.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order as returned by `GET /orders` and `GET /orders/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Bare id or the populated customer document.
    #[serde(default)]
    pub customer_id: Option<Reference<Customer>>,

    /// Populated customer, when the backend sends it under its own key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub status: OrderStatus,

    #[serde(with = "money::decimal", default)]
    pub total: Money,

    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

impl Order {
    /// The customer document, wherever the backend put it.
    pub fn customer_details(&self) -> Option<&Customer> {
        self.customer
            .as_ref()
            .or_else(|| self.customer_id.as_ref().and_then(Reference::embedded))
    }

    /// Customer name for display; `None` when the order was not populated
    /// or the populated customer has no name.
    pub fn customer_name(&self) -> Option<&str> {
        self.customer_details()
            .map(|c| c.name.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    /// Referenced customer id.
    pub fn customer_ref_id(&self) -> Option<&str> {
        self.customer_id
            .as_ref()
            .map(Reference::id)
            .or_else(|| self.customer.as_ref().map(|c| c.id.as_str()))
    }

    /// First eight characters of the id followed by an ellipsis.
    pub fn short_id(&self) -> String {
        let prefix: String = self.id.chars().take(8).collect();
        format!("{}...", prefix)
    }

    /// Order date as `YYYY-MM-DD`, or an empty string when unknown.
    pub fn date_label(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Σ line totals, for comparison against the stored total.
    pub fn lines_total(&self) -> Money {
        self.order_items.iter().map(OrderItem::line_total).sum()
    }
}

impl Identified for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One order line with the unit price frozen at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,

    #[serde(default)]
    pub order_id: Option<String>,

    pub item_id: Reference<Item>,

    /// Populated item, when sent under its own key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,

    pub quantity: i64,

    /// Unit price snapshot.
    #[serde(with = "money::decimal")]
    pub price: Money,
}

impl OrderItem {
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Item name if the backend populated it.
    pub fn item_name(&self) -> Option<&str> {
        self.item
            .as_ref()
            .or_else(|| self.item_id.embedded())
            .map(|i| i.name.as_str())
            .filter(|name| !name.trim().is_empty())
    }
}

// =============================================================================
// Order Creation Payload
// =============================================================================

/// Body of `POST /orders`.
///
/// ```json
/// {
///   "customerId": "c-1",
///   "orderItems": [{ "itemId": "i-1", "quantity": 1, "price": 350 }],
///   "total": 350
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_id: String,
    pub order_items: Vec<NewOrderLine>,
    #[serde(with = "money::decimal")]
    pub total: Money,
}

/// One line of a [`NewOrder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderLine {
    pub item_id: String,
    pub quantity: i64,
    #[serde(with = "money::decimal")]
    pub price: Money,
}

// =============================================================================
// Authentication
// =============================================================================

/// Body of the login request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of the register request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Opaque user payload returned by login/signup.
///
/// The shape differs between endpoints (login wraps the user in
/// `sendingUser`, signup returns it flat), so the payload is kept as JSON and
/// only probed for the fields the dashboard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthUser(pub Value);

impl AuthUser {
    const NESTINGS: [&'static str; 2] = ["sendingUser", "user"];

    fn probe(&self, field: &str) -> Option<&str> {
        Self::NESTINGS
            .iter()
            .filter_map(|key| self.0.get(key))
            .chain(std::iter::once(&self.0))
            .find_map(|v| v.get(field).and_then(Value::as_str))
    }

    /// The marker persisted to session storage: the user's email.
    pub fn marker(&self) -> Option<&str> {
        self.probe("email")
    }

    pub fn name(&self) -> Option<&str> {
        self.probe("name")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_accepts_both_id_spellings() {
        let a: Customer = serde_json::from_value(json!({
            "_id": "c-1", "name": "Jane", "email": "jane@example.com",
            "telephone": "0771234567", "createdAt": "2024-03-01T10:00:00.000Z",
            "__v": 0
        }))
        .unwrap();
        let b: Customer = serde_json::from_value(json!({
            "id": "c-1", "name": "Jane", "email": "jane@example.com", "telephone": "0771234567"
        }))
        .unwrap();

        assert_eq!(a.id, "c-1");
        assert_eq!(b.id, "c-1");
        assert!(a.created_at.is_some());
        assert!(b.created_at.is_none());
    }

    #[test]
    fn test_item_wire_format() {
        let item: Item = serde_json::from_value(json!({
            "_id": "i-1", "name": "Latte", "category": "Beverage", "price": 350
        }))
        .unwrap();

        assert_eq!(item.category, ItemCategory::Beverage);
        assert_eq!(item.price, Money::from_major_minor(350, 0));
        assert!(item.image.is_none());

        let draft = ItemDraft::from(&item);
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body, json!({"name": "Latte", "category": "Beverage", "price": 350}));
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("cake".parse::<ItemCategory>().unwrap(), ItemCategory::Cake);
        assert_eq!(" Pastry ".parse::<ItemCategory>().unwrap(), ItemCategory::Pastry);
        assert!("sandwich".parse::<ItemCategory>().is_err());
        assert_eq!(ItemCategory::default(), ItemCategory::Cake);
    }

    #[test]
    fn test_stored_categories_decode_leniently() {
        let items: Vec<Item> = serde_json::from_value(json!([
            {"_id": "i-1", "name": "Latte", "category": "Beverage", "price": 350},
            {"_id": "i-2", "name": "Mocha", "category": "beverage", "price": 400},
            {"_id": "i-3", "name": "Toast", "category": "Sandwich", "price": 300}
        ]))
        .unwrap();

        assert_eq!(items[0].category, ItemCategory::Beverage);
        assert_eq!(items[1].category, ItemCategory::Beverage);
        assert_eq!(items[2].category, ItemCategory::Other("Sandwich".to_string()));
        assert_eq!(
            serde_json::to_value(&items[2].category).unwrap(),
            json!("Sandwich")
        );
    }

    #[test]
    fn test_order_with_partly_populated_references() {
        let order: Order = serde_json::from_value(json!({
            "_id": "o-1",
            "customerId": {"_id": "c-1", "name": "Jane", "email": "j@x.lk"},
            "total": 350,
            "orderItems": [{"itemId": {"_id": "i-1", "price": 350}, "quantity": 1, "price": 350}]
        }))
        .unwrap();

        let customer = order.customer_details().unwrap();
        assert_eq!(customer.email, "j@x.lk");
        assert_eq!(customer.telephone, "");
        assert_eq!(order.customer_name(), Some("Jane"));
        assert_eq!(order.order_items[0].item_id.id(), "i-1");
        assert_eq!(order.order_items[0].item_name(), None);
    }

    #[test]
    fn test_status_parsing_and_default() {
        assert_eq!("Preparing".parse::<OrderStatus>().unwrap(), OrderStatus::Preparing);
        assert_eq!("canceled".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert!("shipped".parse::<OrderStatus>().is_err());

        let order: Order = serde_json::from_value(json!({"_id": "o-1"})).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.order_items.is_empty());
    }

    #[test]
    fn test_order_with_populated_customer() {
        let order: Order = serde_json::from_value(json!({
            "_id": "65f1c2d3e4a5b6c7d8e9f0a1",
            "customerId": {"_id": "c-1", "name": "Jane", "email": "j@x.lk", "telephone": "077"},
            "date": "2024-03-01T10:00:00.000Z",
            "status": "completed",
            "total": 700,
            "orderItems": [
                {"_id": "l-1", "orderId": "65f1", "itemId": {"_id": "i-1", "name": "Latte", "category": "Beverage", "price": 350}, "quantity": 2, "price": 350}
            ]
        }))
        .unwrap();

        assert_eq!(order.customer_name(), Some("Jane"));
        assert_eq!(order.customer_ref_id(), Some("c-1"));
        assert_eq!(order.short_id(), "65f1c2d3...");
        assert_eq!(order.date_label(), "2024-03-01");
        assert_eq!(order.order_items[0].item_name(), Some("Latte"));
        assert_eq!(order.lines_total(), order.total);
    }

    #[test]
    fn test_order_with_bare_customer_id() {
        let order: Order = serde_json::from_value(json!({
            "_id": "o-2", "customerId": "c-9", "total": 12.5,
            "orderItems": [{"itemId": "i-3", "quantity": 1, "price": 12.5}]
        }))
        .unwrap();

        assert_eq!(order.customer_name(), None);
        assert_eq!(order.customer_ref_id(), Some("c-9"));
        assert_eq!(order.total.cents(), 1250);
        assert_eq!(order.order_items[0].item_id.id(), "i-3");
        assert_eq!(order.order_items[0].item_name(), None);
    }

    #[test]
    fn test_new_order_body() {
        let body = NewOrder {
            customer_id: "c-1".to_string(),
            order_items: vec![NewOrderLine {
                item_id: "i-1".to_string(),
                quantity: 1,
                price: Money::from_major_minor(350, 0),
            }],
            total: Money::from_major_minor(350, 0),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "customerId": "c-1",
                "orderItems": [{"itemId": "i-1", "quantity": 1, "price": 350}],
                "total": 350
            })
        );
    }

    #[test]
    fn test_auth_user_marker() {
        let login = AuthUser(json!({"message": "ok", "sendingUser": {"name": "Namal", "email": "namal@gmail.com"}}));
        assert_eq!(login.marker(), Some("namal@gmail.com"));
        assert_eq!(login.name(), Some("Namal"));

        let signup = AuthUser(json!({"name": "Test", "email": "testuser3@gmail.com"}));
        assert_eq!(signup.marker(), Some("testuser3@gmail.com"));

        let empty = AuthUser(json!({"token": "x"}));
        assert_eq!(empty.marker(), None);
    }
}
