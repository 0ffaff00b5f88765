#![warn(missing_docs)]

//! # admin-dashboard
//!
//! A terminal admin dashboard for a remote list of user records, built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) and lipgloss.
//!
//! ## Overview
//!
//! The dashboard fetches a JSON array of users once at startup, then lets an
//! operator search, page through, check, rename and delete rows. Nothing is
//! written back to the server.
//!
//! The crate is split the same way the screen is:
//!
//! - **State**: [`dashboard`] holds the collection, the filtered view, the
//!   page cursor and the selection, and exposes a pure [`reduce`] function.
//! - **Widgets**: [`table`], [`paginator`], [`textinput`], [`spinner`] and
//!   [`help`] each follow the Elm Architecture with `update` and `view`.
//! - **Runtime**: [`app`] implements `bubbletea_rs::Model` and turns key
//!   presses into [`Action`]s; [`loader`] performs the fetch.
//!
//! ## Using the state without a terminal
//!
//! ```rust
//! use admin_dashboard::{reduce, Action, Dashboard, User};
//!
//! let users = vec![
//!     User::new("1", "Aaron Miles", "aaron@mailinator.com", "member"),
//!     User::new("2", "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
//!     User::new("3", "Arvind Kumar", "arvind@mailinator.com", "admin"),
//! ];
//!
//! let state = reduce(&Dashboard::new(), Action::Loaded(users));
//! let state = reduce(&state, Action::Search("ADMIN".into()));
//! assert_eq!(state.filtered().len(), 1);
//! assert_eq!(state.page(), 1);
//!
//! let state = reduce(&state, Action::Remove("3".into()));
//! assert_eq!(state.users().len(), 2);
//! ```
//!
//! ## Key Bindings
//!
//! Widgets use the type-safe key binding system from the [`key`] module:
//!
//! ```rust
//! use admin_dashboard::key::{Binding, KeyMap};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let remove = Binding::new(vec![KeyCode::Char('x')]).with_help("x", "remove");
//! let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+s", "save");
//!
//! struct RowKeys {
//!     remove: Binding,
//!     save: Binding,
//! }
//!
//! impl KeyMap for RowKeys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.remove, &self.save]
//!     }
//! }
//! ```

pub mod app;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod help;
pub mod key;
pub mod keys;
pub mod loader;
pub mod logging;
pub mod paginator;
pub mod spinner;
pub mod table;
pub mod textinput;
pub mod user;

pub use app::{App, Focus};
pub use config::{Args, Config};
pub use dashboard::{reduce, Action, Dashboard};
pub use error::{DashboardError, Result};
pub use key::{Binding, KeyMap, KeyPress};
pub use user::User;

/// Prelude module for convenient imports.
///
/// ```rust
/// use admin_dashboard::prelude::*;
///
/// let state = reduce(&Dashboard::new(), Action::Loaded(Vec::<User>::new()));
/// assert_eq!(state.page_count(), 0);
/// ```
pub mod prelude {
    pub use crate::app::{App, Focus};
    pub use crate::config::{Args, Config};
    pub use crate::dashboard::{reduce, Action, Dashboard};
    pub use crate::error::{DashboardError, Result};
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::paginator::Model as Paginator;
    pub use crate::spinner::Model as Spinner;
    pub use crate::table::Model as Table;
    pub use crate::textinput::Model as TextInput;
    pub use crate::user::User;
}
