//! # Dashboard Statistics
//!
//! Figures shown on the landing page, computed from the fetched lists.

use std::collections::BTreeMap;

use crate::money::Money;
use crate::types::{Customer, Item, ItemCategory, Order};
use crate::RECENT_ITEMS_LIMIT;

/// Counts, revenue and the category breakdown for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_customers: usize,
    pub total_items: usize,
    pub total_orders: usize,
    /// Σ order totals as reported by the backend.
    pub revenue: Money,
    /// Only categories with at least one item appear.
    pub items_by_category: BTreeMap<ItemCategory, usize>,
    /// First items of the list, as fetched.
    pub recent_items: Vec<Item>,
}

impl DashboardStats {
    pub fn compute(customers: &[Customer], items: &[Item], orders: &[Order]) -> Self {
        let mut items_by_category = BTreeMap::new();
        for item in items {
            *items_by_category.entry(item.category.clone()).or_insert(0) += 1;
        }

        DashboardStats {
            total_customers: customers.len(),
            total_items: items.len(),
            total_orders: orders.len(),
            revenue: orders.iter().map(|o| o.total).sum(),
            items_by_category,
            recent_items: items.iter().take(RECENT_ITEMS_LIMIT).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, total_cents: i64) -> Order {
        Order {
            id: id.to_string(),
            customer_id: None,
            customer: None,
            date: None,
            status: Default::default(),
            total: Money::from_cents(total_cents),
            order_items: vec![],
        }
    }

    #[test]
    fn test_compute() {
        let items: Vec<Item> = (0..10)
            .map(|i| {
                let category = if i % 2 == 0 {
                    ItemCategory::Beverage
                } else {
                    ItemCategory::Cake
                };
                Item::new(i.to_string(), format!("Item {}", i), category, Money::from_cents(100))
            })
            .collect();
        let orders = vec![order("a", 35000), order("b", 12550)];

        let stats = DashboardStats::compute(&[], &items, &orders);

        assert_eq!(stats.total_customers, 0);
        assert_eq!(stats.total_items, 10);
        assert_eq!(stats.total_orders, 2);
        assert_eq!(stats.revenue.cents(), 47550);
        assert_eq!(stats.items_by_category[&ItemCategory::Beverage], 5);
        assert_eq!(stats.items_by_category.get(&ItemCategory::Pastry), None);
        assert_eq!(stats.recent_items.len(), RECENT_ITEMS_LIMIT);
        assert_eq!(stats.recent_items[0].id, "0");
    }

    #[test]
    fn test_counts_categories_outside_the_form_set() {
        let items: Vec<Item> = serde_json::from_value(serde_json::json!([
            {"_id": "1", "name": "Latte", "category": "beverage", "price": 350},
            {"_id": "2", "name": "Toast", "category": "Sandwich", "price": 300},
            {"_id": "3", "name": "Wrap", "category": "Sandwich", "price": 450}
        ]))
        .unwrap();

        let stats = DashboardStats::compute(&[], &items, &[]);

        assert_eq!(stats.items_by_category[&ItemCategory::Beverage], 1);
        assert_eq!(
            stats.items_by_category[&ItemCategory::Other("Sandwich".to_string())],
            2
        );
    }
}
