//! # Pages
//!
//! One view model per route. A page owns only its view state (search terms,
//! modal buffers, panel flags); records live in the [`Store`](barista_client::Store)
//! and every action takes the store explicitly.
//!
//! ```text
//! pages/
//! ├── mod.rs            ◄─── You are here
//! ├── dashboard.rs      ◄─── /
//! ├── customers.rs      ◄─── /customers
//! ├── items.rs          ◄─── /items
//! ├── orders.rs         ◄─── /orders (list + cart panel)
//! ├── order_details.rs  ◄─── /order-details?id=<id>
//! ├── login.rs          ◄─── /login
//! └── signup.rs         ◄─── /signup
//! ```

pub mod customers;
pub mod dashboard;
pub mod items;
pub mod login;
pub mod order_details;
pub mod orders;
pub mod signup;

pub use customers::CustomersPage;
pub use dashboard::DashboardPage;
pub use items::ItemsPage;
pub use login::LoginPage;
pub use order_details::OrderDetailsPage;
pub use orders::OrdersPage;
pub use signup::SignupPage;
