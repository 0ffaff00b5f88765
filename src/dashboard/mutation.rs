//! Rename and delete.
//!
//! Each mutation rewrites the collection and then replaces the filtered view
//! with a copy of it, so any active search is dropped at that point.

use super::Dashboard;

impl Dashboard {
    pub(super) fn rename(&mut self, id: &str, name: String) {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                tracing::info!(id, old = %user.name, new = %name, "user renamed");
                user.name = name;
            }
            None => tracing::warn!(id, "rename of unknown user"),
        }
        self.sync_filtered();
        self.editing = None;
    }

    pub(super) fn remove(&mut self, id: &str) {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        if self.users.len() < before {
            tracing::info!(id, "user removed");
        }
        self.sync_filtered();
    }

    pub(super) fn remove_selected(&mut self) {
        let before = self.users.len();
        let selected = std::mem::take(&mut self.selected);
        self.users.retain(|u| !selected.contains(&u.id));
        tracing::info!(removed = before - self.users.len(), "selected users removed");
        self.sync_filtered();
    }

    fn sync_filtered(&mut self) {
        self.filtered = self.users.clone();
    }
}
