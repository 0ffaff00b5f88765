//! Dashboard list state and its reducer.
//!
//! [`Dashboard`] owns everything the table shows: the loaded collection, the
//! filtered view derived from the last search, the page cursor, the selection
//! set and the row being renamed. Every user action is an [`Action`] and
//! [`reduce`] maps `(state, action)` to the next state.
//!
//! ```rust
//! use admin_dashboard::dashboard::{reduce, Action, Dashboard};
//! use admin_dashboard::User;
//!
//! let users: Vec<User> = (1..=25)
//!     .map(|i| User::new(i.to_string(), format!("User {i}"), format!("u{i}@example.com"), "member"))
//!     .collect();
//!
//! let state = reduce(&Dashboard::new(), Action::Loaded(users));
//! assert_eq!(state.page_count(), 3);
//!
//! let state = reduce(&state, Action::LastPage);
//! assert_eq!(state.page_rows().len(), 5);
//! ```

mod filtering;
mod mutation;
mod selection;


use crate::paginator;
use crate::user::User;
use std::collections::BTreeSet;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The remote collection arrived.
    Loaded(Vec<User>),
    /// Filter the collection by a free-text query.
    Search(String),
    /// Go to page 1.
    FirstPage,
    /// Go back one page.
    PrevPage,
    /// Go to a specific 1-indexed page.
    GoToPage(usize),
    /// Go forward one page.
    NextPage,
    /// Go to the last page.
    LastPage,
    /// Toggle one row's checkbox.
    ToggleRow(String),
    /// The header checkbox.
    ToggleAll,
    /// Enter rename mode for a row.
    BeginEdit(String),
    /// Commit a new name for a row.
    Rename {
        /// Row to rename.
        id: String,
        /// The new display name.
        name: String,
    },
    /// Leave rename mode without changes.
    CancelEdit,
    /// Delete one row.
    Remove(String),
    /// Delete every selected row.
    RemoveSelected,
}

/// The dashboard list state.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    users: Vec<User>,
    filtered: Vec<User>,
    selected: BTreeSet<String>,
    pager: paginator::Model,
    editing: Option<String>,
}

impl Dashboard {
    /// Creates an empty dashboard on page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an action in place.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Loaded(users) => {
                tracing::debug!(count = users.len(), "collection loaded");
                self.filtered = users.clone();
                self.users = users;
            }
            Action::Search(query) => self.search(&query),
            Action::FirstPage => self.pager.first_page(),
            Action::PrevPage => self.pager.prev_page(),
            Action::GoToPage(page) => self.pager.go_to(page),
            Action::NextPage => self.pager.next_page(self.filtered.len()),
            Action::LastPage => self.pager.last_page(self.filtered.len()),
            Action::ToggleRow(id) => self.toggle_row(id),
            Action::ToggleAll => self.toggle_all(),
            Action::BeginEdit(id) => self.editing = Some(id),
            Action::Rename { id, name } => self.rename(&id, name),
            Action::CancelEdit => self.editing = None,
            Action::Remove(id) => self.remove(&id),
            Action::RemoveSelected => self.remove_selected(),
        }
    }

    /// The full collection.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The filtered view.
    pub fn filtered(&self) -> &[User] {
        &self.filtered
    }

    /// Ids of the checked rows.
    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Reports whether a row is checked.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// The current 1-indexed page.
    pub fn page(&self) -> usize {
        self.pager.page
    }

    /// The page cursor.
    pub fn pager(&self) -> &paginator::Model {
        &self.pager
    }

    /// Number of pages in the filtered view. Zero when it is empty.
    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.filtered.len())
    }

    /// Rows of the current page; empty when the page is out of range.
    pub fn page_rows(&self) -> &[User] {
        let (start, end) = self.pager.slice_bounds(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Id of the row in rename mode.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Current name of a user in the collection, used to seed the rename
    /// draft. Empty when the id is unknown.
    pub fn name_of(&self, id: &str) -> String {
        self.users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.name.clone())
            .unwrap_or_default()
    }
}

/// Produces the state that follows `state` after `action`.
pub fn reduce(state: &Dashboard, action: Action) -> Dashboard {
    let mut next = state.clone();
    next.apply(action);
    next
}
