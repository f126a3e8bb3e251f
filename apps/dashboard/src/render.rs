//! Table rendering for the pages.
//!
//! Every amount goes through [`money`], so the currency prefix configured in
//! `display.currency` is applied uniformly (`LKR 350.00`).

use barista_core::{Cart, Customer, DashboardStats, Item, Money, Order, OrderStatus};
use comfy_table::{Attribute, Cell, Color, Table};

/// Shown where the order has no populated customer.
pub const UNKNOWN: &str = "Unknown";

/// Shown for missing customer contact fields.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn money(amount: Money, currency: &str) -> String {
    amount.format_with(currency)
}

fn status_cell(status: OrderStatus) -> Cell {
    let color = match status {
        OrderStatus::Pending => Color::Yellow,
        OrderStatus::Preparing => Color::Blue,
        OrderStatus::Completed => Color::Green,
        OrderStatus::Cancelled => Color::Red,
    };
    Cell::new(status.label()).fg(color)
}

fn or_fallback(value: &str, fallback: &'static str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

// =============================================================================
// Lists
// =============================================================================

pub fn customers_table(customers: &[&Customer]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Name"),
        Cell::new("Email"),
        Cell::new("Telephone"),
    ]);

    for customer in customers {
        table.add_row(vec![
            Cell::new(&customer.id),
            Cell::new(&customer.name),
            Cell::new(&customer.email),
            Cell::new(&customer.telephone),
        ]);
    }
    table
}

pub fn items_table(items: &[&Item], currency: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Name"),
        Cell::new("Category"),
        Cell::new("Price"),
        Cell::new("Remark"),
    ]);

    for item in items {
        table.add_row(vec![
            Cell::new(&item.id),
            Cell::new(&item.name),
            Cell::new(&item.category),
            Cell::new(money(item.price, currency)),
            Cell::new(item.remark.as_deref().unwrap_or("")),
        ]);
    }
    table
}

pub fn orders_table(orders: &[&Order], currency: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Order ID"),
        Cell::new("Customer"),
        Cell::new("Date"),
        Cell::new("Status"),
        Cell::new("Total"),
    ]);

    for order in orders {
        table.add_row(vec![
            Cell::new(&order.id),
            Cell::new(order.customer_name().unwrap_or(UNKNOWN)),
            Cell::new(order.date_label()),
            status_cell(order.status),
            Cell::new(money(order.total, currency)),
        ]);
    }
    table
}

// =============================================================================
// Order Details
// =============================================================================

/// Date, customer contact, total and status of one order.
pub fn order_summary_table(order: &Order, currency: &str) -> Table {
    let customer = order.customer_details();
    let contact = |value: Option<&str>| {
        value
            .map(|v| or_fallback(v, NOT_AVAILABLE))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    let mut table = Table::new();
    table.add_row(vec![Cell::new("Order"), Cell::new(&order.id)]);
    table.add_row(vec![
        Cell::new("Date"),
        Cell::new(or_fallback(&order.date_label(), NOT_AVAILABLE)),
    ]);
    table.add_row(vec![
        Cell::new("Customer"),
        Cell::new(
            customer
                .map(|c| or_fallback(&c.name, UNKNOWN))
                .unwrap_or_else(|| UNKNOWN.to_string()),
        ),
    ]);
    table.add_row(vec![
        Cell::new("Email"),
        Cell::new(contact(customer.map(|c| c.email.as_str()))),
    ]);
    table.add_row(vec![
        Cell::new("Telephone"),
        Cell::new(contact(customer.map(|c| c.telephone.as_str()))),
    ]);
    table.add_row(vec![Cell::new("Status"), status_cell(order.status)]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(money(order.total, currency)).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn order_lines_table(order: &Order, currency: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Item"),
        Cell::new("Quantity"),
        Cell::new("Price"),
        Cell::new("Subtotal"),
    ]);

    for line in &order.order_items {
        table.add_row(vec![
            Cell::new(line.item_name().unwrap_or(UNKNOWN)),
            Cell::new(line.quantity),
            Cell::new(money(line.price, currency)),
            Cell::new(money(line.line_total(), currency)),
        ]);
    }
    table
}

// =============================================================================
// Cart
// =============================================================================

pub fn cart_table(cart: &Cart, currency: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Item"),
        Cell::new("Qty"),
        Cell::new("Price"),
        Cell::new("Subtotal"),
    ]);

    for line in cart.lines() {
        table.add_row(vec![
            Cell::new(&line.item.name),
            Cell::new(line.quantity),
            Cell::new(money(line.item.price, currency)),
            Cell::new(money(line.line_total(), currency)),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(cart.total_quantity()).add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(money(cart.total(), currency)).add_attribute(Attribute::Bold),
    ]);
    table
}

// =============================================================================
// Dashboard
// =============================================================================

pub fn stats_table(stats: &DashboardStats, currency: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![Cell::new("Metric"), Cell::new("Value")]);
    table.add_row(vec![Cell::new("Customers"), Cell::new(stats.total_customers)]);
    table.add_row(vec![Cell::new("Items"), Cell::new(stats.total_items)]);
    table.add_row(vec![Cell::new("Orders"), Cell::new(stats.total_orders)]);
    table.add_row(vec![
        Cell::new("Revenue").add_attribute(Attribute::Bold),
        Cell::new(money(stats.revenue, currency)).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn categories_table(stats: &DashboardStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![Cell::new("Category"), Cell::new("Items")]);
    for (category, count) in &stats.items_by_category {
        table.add_row(vec![Cell::new(category), Cell::new(count)]);
    }
    table
}
