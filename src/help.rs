//! Single-line key help, generated from a [`KeyMap`].
//!
//! ```rust
//! use admin_dashboard::help::Model;
//! use admin_dashboard::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let quit = Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit");
//! let find = Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search");
//! let help = Model::new();
//! let out = help.short_help_view(vec![&find, &quit]);
//! assert!(out.contains("quit"));
//! ```

use crate::key::{self, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help line.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Key labels.
    pub key: Style,
    /// Descriptions.
    pub desc: Style,
    /// Separators and the truncation ellipsis.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            key: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            desc: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
            separator: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
        }
    }
}

/// Help bar state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Maximum width; 0 means unlimited.
    pub width: usize,
    /// Text between bindings.
    pub separator: String,
    /// Shown when bindings had to be dropped to fit.
    pub ellipsis: String,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            width: 0,
            separator: " • ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates an unlimited-width help bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width (builder).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the short help of a key map.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        self.short_help_view(keymap.short_help())
    }

    /// Renders `key desc • key desc …`, skipping disabled bindings and
    /// cutting off with an ellipsis when the width is exceeded.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let separator = self.styles.separator.render(&self.separator);
        let mut out = String::new();
        let mut total_width = 0;

        for binding in bindings.into_iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = binding.help();
            let item = format!(
                "{sep}{} {}",
                self.styles.key.render(&help.key),
                self.styles.desc.render(&help.desc)
            );
            let item_width = lipgloss::width_visible(&item);

            if self.width > 0 && total_width + item_width > self.width {
                let tail = format!(" {}", self.styles.separator.render(&self.ellipsis));
                if total_width + lipgloss::width_visible(&tail) <= self.width {
                    out.push_str(&tail);
                }
                break;
            }

            total_width += item_width;
            out.push_str(&item);
        }
        out
    }
}
