//! Search over the collection.

use super::Dashboard;

impl Dashboard {
    /// Rebuilds the filtered view from the whole collection and returns to
    /// page 1. An empty query keeps every user.
    pub(super) fn search(&mut self, query: &str) {
        let needle = query.to_lowercase();
        self.filtered = self
            .users
            .iter()
            .filter(|user| user.matches(&needle))
            .cloned()
            .collect();
        self.pager.first_page();

        tracing::debug!(
            query,
            matched = self.filtered.len(),
            total = self.users.len(),
            "search applied"
        );
    }
}
