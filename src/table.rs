//! Checkbox table used for the user list.
//!
//! The table is a pure view over rows handed to it by its owner: it knows
//! nothing about users, only about cells, which rows are checked and where
//! the row cursor sits.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// A column header and its width in terminal cells.
#[derive(Debug, Clone)]
pub struct Column {
    /// Header text.
    pub title: String,
    /// Width in cells, excluding separators.
    pub width: usize,
}

impl Column {
    /// Creates a column.
    pub fn new(title: impl Into<String>, width: usize) -> Self {
        Self {
            title: title.into(),
            width,
        }
    }
}

/// One table row.
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// Cell text, one per column.
    pub cells: Vec<String>,
    /// Whether the row checkbox is ticked.
    pub checked: bool,
}

impl Row {
    /// Creates an unchecked row.
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            checked: false,
        }
    }

    /// Sets the checkbox (builder).
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// Styles for the table.
#[derive(Debug, Clone)]
pub struct TableStyles {
    /// Header line.
    pub header: Style,
    /// Plain rows.
    pub cell: Style,
    /// Row under the cursor.
    pub cursor: Style,
    /// Checked rows.
    pub checked: Style,
    /// Placeholder shown when there are no rows.
    pub empty: Style,
}

impl Default for TableStyles {
    fn default() -> Self {
        Self {
            header: Style::new()
                .bold(true)
                .foreground(Color::from("255"))
                .background(Color::from("236")),
            cell: Style::new(),
            cursor: Style::new()
                .foreground(Color::from("229"))
                .background(Color::from("57")),
            checked: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }).background(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
            empty: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}

/// The table widget.
#[derive(Debug, Clone)]
pub struct Model {
    columns: Vec<Column>,
    base_widths: Vec<usize>,
    rows: Vec<Row>,
    cursor: usize,
    header_checked: bool,
    /// Table styles.
    pub styles: TableStyles,
}

impl Model {
    /// Creates an empty table.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            base_widths: columns.iter().map(|c| c.width).collect(),
            columns,
            rows: Vec::new(),
            cursor: 0,
            header_checked: false,
            styles: TableStyles::default(),
        }
    }

    /// Replaces the rows, keeping the cursor inside them.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }

    /// The columns at their current widths.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The current rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Sets the header checkbox.
    pub fn set_header_checked(&mut self, checked: bool) {
        self.header_checked = checked;
    }

    /// Index of the row under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamped to the rows.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.rows.len().saturating_sub(1));
    }

    /// Moves the cursor up one row.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    /// Scales column widths so the table fits in `width` terminal cells.
    ///
    /// Widths are always derived from the ones the table was created with,
    /// so repeated resizes do not accumulate rounding.
    pub fn fit_width(&mut self, width: usize) {
        let fixed = CHECKED.len() + 1 + 3 * self.columns.len();
        let base: usize = self.base_widths.iter().sum();
        let available = width.saturating_sub(fixed);
        if base == 0 || available == 0 {
            return;
        }
        for (column, &base_width) in self.columns.iter_mut().zip(&self.base_widths) {
            column.width = (base_width * available / base).max(column.title.len());
        }
    }

    /// Renders the header and rows.
    pub fn view(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);

        let box_ = if self.header_checked { CHECKED } else { UNCHECKED };
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad(&c.title, c.width))
            .collect();
        lines.push(
            self.styles
                .header
                .render(&format!("{box_} │ {}", header.join(" │ "))),
        );

        if self.rows.is_empty() {
            lines.push(self.styles.empty.render("  No users found."));
        }

        for (i, row) in self.rows.iter().enumerate() {
            let box_ = if row.checked { CHECKED } else { UNCHECKED };
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(col, c)| pad(row.cells.get(col).map(String::as_str).unwrap_or(""), c.width))
                .collect();
            let line = format!("{box_} │ {}", cells.join(" │ "));

            let style = if i == self.cursor {
                &self.styles.cursor
            } else if row.checked {
                &self.styles.checked
            } else {
                &self.styles.cell
            };
            lines.push(style.render(&line));
        }

        lines.join("\n")
    }
}

/// Pads or truncates a cell to exactly `width` visible columns. Cells that
/// already carry styling are padded but never cut.
fn pad(cell: &str, width: usize) -> String {
    let visible = lipgloss::width_visible(cell);
    if visible <= width {
        return format!("{cell}{}", " ".repeat(width - visible));
    }
    if cell.contains('\x1b') {
        return cell.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in cell.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    fn table() -> Model {
        let mut t = Model::new(vec![Column::new("Name", 6), Column::new("Role", 6)]);
        t.set_rows(vec![
            Row::new(vec!["Ann".into(), "admin".into()]),
            Row::new(vec!["Bob".into(), "member".into()]).with_checked(true),
            Row::new(vec!["Cyd".into(), "member".into()]),
        ]);
        t
    }

    #[test]
    fn test_pad_and_truncate() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abc…");
        assert_eq!(pad("", 2), "  ");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut t = table();
        t.move_up();
        assert_eq!(t.cursor(), 0);
        t.move_down();
        t.move_down();
        t.move_down();
        assert_eq!(t.cursor(), 2);
        t.set_rows(vec![Row::new(vec!["Ann".into()])]);
        assert_eq!(t.cursor(), 0);
    }

    #[test]
    fn test_view_renders_checkboxes() {
        let mut t = table();
        t.set_header_checked(true);
        let view = plain(&t.view());
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("[x] │ Name"));
        assert!(lines[1].starts_with("[ ] │ Ann"));
        assert!(lines[2].starts_with("[x] │ Bob"));
    }

    #[test]
    fn test_fit_width_scales_columns() {
        let mut t = Model::new(vec![
            Column::new("Name", 24),
            Column::new("Email", 32),
            Column::new("Role", 10),
        ]);
        t.fit_width(100);
        let widths: Vec<usize> = t.columns().iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![31, 42, 13]);

        t.fit_width(40);
        let widths: Vec<usize> = t.columns().iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![9, 13, 4]);
    }

    #[test]
    fn test_fit_width_shrink_then_grow_restores_widths() {
        let mut t = Model::new(vec![
            Column::new("Name", 24),
            Column::new("Email", 32),
            Column::new("Role", 10),
        ]);
        t.fit_width(100);
        let wide: Vec<usize> = t.columns().iter().map(|c| c.width).collect();
        for width in [40, 17, 63, 100] {
            t.fit_width(width);
        }
        let again: Vec<usize> = t.columns().iter().map(|c| c.width).collect();
        assert_eq!(wide, again);
    }

    #[test]
    fn test_fit_width_ignores_zero_width() {
        let mut t = table();
        t.fit_width(0);
        assert_eq!(t.columns()[0].width, 6);
    }

    #[test]
    fn test_view_of_empty_table() {
        let t = Model::new(vec![Column::new("Name", 6)]);
        let view = plain(&t.view());
        assert!(view.contains("No users found."));
    }
}
