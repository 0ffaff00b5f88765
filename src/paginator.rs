//! Page cursor over the filtered user list, plus the pagination strip.
//!
//! The cursor is 1-indexed and never clamped when the list
//! shrinks: a page past the end simply yields an empty slice. The page count
//! for an empty list is zero, so the strip renders no numbered buttons.

use crate::key::{self, KeyMap as KeyMapTrait};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;

/// Number of rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// Key bindings for page navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Jump to the first page.
    pub first_page: key::Binding,
    /// Go back one page.
    pub prev_page: key::Binding,
    /// Go forward one page.
    pub next_page: key::Binding,
    /// Jump to the last page.
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            first_page: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first page"),
            prev_page: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h'), KeyCode::PageUp])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::Right,
                KeyCode::Char('l'),
                KeyCode::PageDown,
            ])
            .with_help("→/l", "next page"),
            last_page: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }
}

/// Styles for the pagination strip.
#[derive(Debug, Clone)]
pub struct PaginatorStyles {
    /// Enabled navigation buttons and inactive page numbers.
    pub button: Style,
    /// The current page number.
    pub active: Style,
    /// Navigation buttons that would be a no-op.
    pub disabled: Style,
}

impl Default for PaginatorStyles {
    fn default() -> Self {
        Self {
            button: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            active: Style::new()
                .bold(true)
                .foreground(Color::from("230"))
                .background(Color::from("62")),
            disabled: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
        }
    }
}

/// The page cursor.
///
/// # Examples
///
/// ```rust
/// use admin_dashboard::paginator::Model;
///
/// let mut pager = Model::new();
/// assert_eq!(pager.page_count(25), 3);
/// assert_eq!(pager.slice_bounds(25), (0, 10));
///
/// pager.last_page(25);
/// assert_eq!(pager.page, 3);
/// assert_eq!(pager.slice_bounds(25), (20, 25));
///
/// // Past the end: empty, not clamped.
/// pager.go_to(9);
/// assert_eq!(pager.slice_bounds(25), (25, 25));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Current page, 1-indexed. Never zero.
    pub page: usize,
    /// Rows per page.
    pub per_page: usize,
    /// Strip styles.
    pub styles: PaginatorStyles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PAGE_SIZE,
            styles: PaginatorStyles::default(),
        }
    }
}

impl Model {
    /// Creates a cursor on page 1 with the standard page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages for a list of `len` rows: `ceil(len / per_page)`.
    ///
    /// Zero for an empty list.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.per_page)
    }

    /// Start and end indices of the current page, clamped to `len`.
    ///
    /// Out-of-range pages give an empty `(len, len)` window.
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.per_page).min(len);
        let end = self.page.saturating_mul(self.per_page).min(len);
        (start, end)
    }

    /// Reports whether the cursor is on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Reports whether there is no next page to move to.
    pub fn on_last_page(&self, len: usize) -> bool {
        self.page >= self.page_count(len)
    }

    /// Moves to page 1.
    pub fn first_page(&mut self) {
        self.page = 1;
    }

    /// Moves back one page; no-op on page 1.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Moves forward one page; no-op on or past the last page.
    pub fn next_page(&mut self, len: usize) {
        if !self.on_last_page(len) {
            self.page += 1;
        }
    }

    /// Moves to the last page. An empty list stays on page 1.
    pub fn last_page(&mut self, len: usize) {
        self.page = self.page_count(len).max(1);
    }

    /// Moves to an arbitrary page. Zero is treated as page 1; pages past the
    /// end are accepted as-is.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Renders the strip: `« ‹ 1 2 3 › »` with the current page highlighted.
    pub fn view(&self, len: usize) -> String {
        let count = self.page_count(len);
        let back = if self.on_first_page() {
            &self.styles.disabled
        } else {
            &self.styles.button
        };
        let forward = if self.on_last_page(len) {
            &self.styles.disabled
        } else {
            &self.styles.button
        };

        let mut parts = vec![back.render("«"), back.render("‹")];
        for n in 1..=count {
            let label = format!(" {n} ");
            if n == self.page {
                parts.push(self.styles.active.render(&label));
            } else {
                parts.push(self.styles.button.render(&label));
            }
        }
        parts.push(forward.render("›"));
        parts.push(forward.render("»"));
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_twenty_five_rows_make_three_pages() {
        let mut pager = Model::new();
        assert_eq!(pager.page_count(25), 3);
        assert_eq!(pager.slice_bounds(25), (0, 10));
        pager.go_to(2);
        assert_eq!(pager.slice_bounds(25), (10, 20));
        pager.go_to(3);
        assert_eq!(pager.slice_bounds(25), (20, 25));
    }

    #[test]
    fn test_empty_list_has_zero_pages() {
        let pager = Model::new();
        assert_eq!(pager.page_count(0), 0);
        assert_eq!(pager.slice_bounds(0), (0, 0));
        assert!(pager.on_last_page(0));
    }

    #[test]
    fn test_prev_is_noop_on_first_page() {
        let mut pager = Model::new();
        pager.prev_page();
        assert_eq!(pager.page, 1);
    }

    #[test]
    fn test_next_is_noop_on_last_page() {
        let mut pager = Model::new();
        pager.last_page(30);
        assert_eq!(pager.page, 3);
        pager.next_page(30);
        assert_eq!(pager.page, 3);
    }

    #[test]
    fn test_cursor_is_not_clamped_when_list_shrinks() {
        let mut pager = Model::new();
        pager.go_to(3);
        assert_eq!(pager.slice_bounds(15), (15, 15));
        assert_eq!(pager.page, 3);
    }

    #[test]
    fn test_view_lists_every_page() {
        let mut pager = Model::new();
        pager.go_to(2);
        let view = plain(&pager.view(25));
        assert!(view.contains(" 1 "));
        assert!(view.contains(" 2 "));
        assert!(view.contains(" 3 "));
        assert!(!view.contains(" 4 "));
    }

    #[test]
    fn test_view_of_empty_list_has_no_page_buttons() {
        let pager = Model::new();
        let view = plain(&pager.view(0));
        assert!(!view.chars().any(|c| c.is_ascii_digit()));
    }
}
