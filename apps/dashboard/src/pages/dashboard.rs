//! Dashboard page: headline counts, revenue, items per category and the
//! most recent items.

use barista_client::Store;
use barista_core::DashboardStats;
use tracing::debug;

use crate::error::AppResult;
use crate::render;

#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    stats: Option<DashboardStats>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches all three lists, then recomputes the figures.
    pub async fn load(&mut self, store: &mut Store) -> AppResult<&DashboardStats> {
        store.fetch_customers().await?;
        store.fetch_items().await?;
        store.fetch_orders().await?;

        let stats = DashboardStats::compute(
            store.customers().all(),
            store.items().all(),
            store.orders().all(),
        );
        debug!(
            customers = stats.total_customers,
            items = stats.total_items,
            orders = stats.total_orders,
            "Dashboard computed"
        );
        Ok(self.stats.insert(stats))
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub fn render(&self, currency: &str) -> String {
        let Some(stats) = &self.stats else {
            return String::new();
        };

        let recent: Vec<_> = stats.recent_items.iter().collect();
        format!(
            "{}\n\nItems by category\n{}\n\nRecent items\n{}",
            render::stats_table(stats, currency),
            render::categories_table(stats),
            render::items_table(&recent, currency),
        )
    }
}
