//! # Client-Side Search
//!
//! Every list page filters the already-fetched records with a substring
//! match; nothing is sent to the backend.
//!
//! | Record   | Case-insensitive fields | Exact-case fields |
//! |----------|-------------------------|-------------------|
//! | Customer | name, email             | telephone         |
//! | Item     | name, category          |                   |
//! | Order    | customer name, order id | date (YYYY-MM-DD) |
//!
//! An empty term matches everything.

use crate::types::{Customer, Item, Order};

/// A record the list pages can filter.
pub trait Searchable {
    fn matches(&self, term: &str) -> bool;
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl Searchable for Customer {
    fn matches(&self, term: &str) -> bool {
        let lower = term.to_lowercase();
        contains_ci(&self.name, &lower)
            || contains_ci(&self.email, &lower)
            || self.telephone.contains(term)
    }
}

impl Searchable for Item {
    fn matches(&self, term: &str) -> bool {
        let lower = term.to_lowercase();
        contains_ci(&self.name, &lower) || contains_ci(self.category.as_str(), &lower)
    }
}

impl Searchable for Order {
    fn matches(&self, term: &str) -> bool {
        let lower = term.to_lowercase();
        self.customer_name().is_some_and(|name| contains_ci(name, &lower))
            || contains_ci(&self.id, &lower)
            || self.date_label().contains(term)
    }
}

/// Records matching `term`, in their original order.
pub fn filter<'a, T: Searchable>(records: &'a [T], term: &str) -> Vec<&'a T> {
    records.iter().filter(|r| r.matches(term)).collect()
}
