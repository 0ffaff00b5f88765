//! Key bindings for the dashboard screen.
//!
//! ## Table
//!
//! - **Rows**: `↑/k` up, `↓/j` down, `space` toggle, `a` toggle page
//! - **Edit**: `e` rename, `x/delete` remove, `D` remove selected
//! - **Pages**: `g/home` first, `←/h` prev, `→/l` next, `G/end` last, `1`-`9` go to,
//!   `:` type a page number
//! - **Other**: `/` search, `q` quit, `ctrl+c` force quit
//!
//! ## Search and rename inputs
//!
//! `enter` submits, `esc` goes back to the table.

use crate::dashboard::Action;
use crate::key::{self, new_binding, with_help, with_keys_str, KeyMap};
use crate::paginator::PaginatorKeyMap;
use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Bindings active while the table has focus.
#[derive(Debug, Clone)]
pub struct DashboardKeyMap {
    /// Move the row cursor up.
    pub cursor_up: key::Binding,
    /// Move the row cursor down.
    pub cursor_down: key::Binding,
    /// Check or uncheck the row under the cursor.
    pub toggle_row: key::Binding,
    /// The header checkbox.
    pub toggle_all: key::Binding,
    /// Rename the row under the cursor.
    pub edit: key::Binding,
    /// Remove the row under the cursor.
    pub remove: key::Binding,
    /// Remove every checked row.
    pub remove_selected: key::Binding,
    /// Focus the search box.
    pub search: key::Binding,
    /// Page navigation.
    pub pages: PaginatorKeyMap,
    /// Open the page number prompt.
    pub go_to_page: key::Binding,
    /// Quit.
    pub quit: key::Binding,
    /// Quit from any focus.
    pub force_quit: key::Binding,
}

impl Default for DashboardKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            toggle_row: key::Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "select"),
            toggle_all: key::Binding::new(vec![KeyCode::Char('a')]).with_help("a", "select page"),
            edit: key::Binding::new(vec![KeyCode::Char('e')]).with_help("e", "edit"),
            remove: key::Binding::new(vec![KeyCode::Char('x'), KeyCode::Delete])
                .with_help("x", "remove"),
            remove_selected: key::Binding::new(vec![KeyCode::Char('D')])
                .with_help("D", "delete selected"),
            search: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            pages: PaginatorKeyMap::default(),
            go_to_page: key::Binding::new(vec![KeyCode::Char(':')]).with_help(":", "go to page"),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: new_binding(vec![
                with_keys_str(&["ctrl+c"]),
                with_help("ctrl+c", "force quit"),
            ]),
        }
    }
}

impl DashboardKeyMap {
    /// Maps a page navigation key (including digits `1`-`9`) to its action.
    pub fn page_action(&self, msg: &KeyMsg) -> Option<Action> {
        if self.pages.first_page.matches(msg) {
            return Some(Action::FirstPage);
        }
        if self.pages.prev_page.matches(msg) {
            return Some(Action::PrevPage);
        }
        if self.pages.next_page.matches(msg) {
            return Some(Action::NextPage);
        }
        if self.pages.last_page.matches(msg) {
            return Some(Action::LastPage);
        }
        match msg.key {
            KeyCode::Char(c @ '1'..='9') if msg.modifiers.is_empty() => {
                c.to_digit(10).map(|d| Action::GoToPage(d as usize))
            }
            _ => None,
        }
    }
}

impl KeyMap for DashboardKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        let mut bindings = vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.toggle_row,
            &self.toggle_all,
            &self.edit,
            &self.remove,
            &self.remove_selected,
            &self.search,
        ];
        bindings.extend(self.pages.short_help());
        bindings.push(&self.go_to_page);
        bindings.push(&self.quit);
        bindings
    }
}

/// Bindings of a focused text input.
#[derive(Debug, Clone)]
pub struct InputKeyMap {
    /// Submit the value.
    pub submit: key::Binding,
    /// Leave without submitting.
    pub cancel: key::Binding,
}

impl InputKeyMap {
    /// Bindings with the given description for `enter`.
    pub fn new(submit_desc: &str) -> Self {
        Self {
            submit: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", submit_desc),
            cancel: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "back"),
        }
    }
}

impl KeyMap for InputKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.submit, &self.cancel]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_page_actions() {
        let keys = DashboardKeyMap::default();
        assert_eq!(keys.page_action(&press(KeyCode::Home)), Some(Action::FirstPage));
        assert_eq!(keys.page_action(&press(KeyCode::Char('h'))), Some(Action::PrevPage));
        assert_eq!(keys.page_action(&press(KeyCode::Right)), Some(Action::NextPage));
        assert_eq!(keys.page_action(&press(KeyCode::Char('G'))), Some(Action::LastPage));
        assert_eq!(keys.page_action(&press(KeyCode::Char('3'))), Some(Action::GoToPage(3)));
        assert_eq!(keys.page_action(&press(KeyCode::Char('0'))), None);
        assert_eq!(keys.page_action(&press(KeyCode::Char('e'))), None);
    }

    #[test]
    fn test_force_quit_needs_control() {
        let keys = DashboardKeyMap::default();
        assert!(keys.force_quit.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
        assert!(!keys.force_quit.matches(&press(KeyCode::Char('c'))));
    }

    #[test]
    fn test_short_help_includes_paging() {
        let keys = DashboardKeyMap::default();
        let bindings = keys.short_help();
        let descs: Vec<&str> = bindings
            .iter()
            .map(|b| b.help().desc.as_str())
            .collect();
        assert!(descs.contains(&"next page"));
        assert!(descs.contains(&"delete selected"));
        assert!(descs.contains(&"go to page"));
        assert_eq!(descs.last(), Some(&"quit"));
    }
}
