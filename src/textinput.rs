//! Single-line text input used by the search box and the rename editor.
//!
//! The input only reacts to keys while focused. Enter and Esc are left to the
//! owner so it can decide what submitting or cancelling means.

use crate::key::{new_binding, with_keys_str, Binding};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Editing key bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Delete from cursor to end of line.
    pub delete_after_cursor: Binding,
    /// Delete from start of line to cursor.
    pub delete_before_cursor: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
}

/// The default editing keys, readline flavoured.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
    }
}

/// Text input state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text shown before the value.
    pub prompt: String,
    /// Text shown while the value is empty.
    pub placeholder: String,
    /// Maximum number of characters; 0 means unlimited.
    pub char_limit: usize,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Style of the prompt.
    pub prompt_style: Style,
    /// Style of the value.
    pub text_style: Style,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Style of the character under the cursor.
    pub cursor_style: Style,
    value: Vec<char>,
    pos: usize,
    focus: bool,
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

/// Creates an empty, blurred input.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        placeholder: String::new(),
        char_limit: 0,
        key_map: default_key_map(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder_style: Style::new().foreground(AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        }),
        cursor_style: Style::new()
            .foreground(Color::from("0"))
            .background(Color::from("212")),
        value: Vec::new(),
        pos: 0,
        focus: false,
    }
}

impl Model {
    /// Sets the prompt (builder).
    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    /// Sets the placeholder (builder).
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    /// Replaces the value and moves the cursor to its end.
    pub fn set_value(&mut self, s: &str) {
        let mut runes: Vec<char> = s.chars().collect();
        if self.char_limit > 0 {
            runes.truncate(self.char_limit);
        }
        self.pos = runes.len();
        self.value = runes;
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Gives the input keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Reports whether the input has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Applies an editing key. Ignored while blurred.
    pub fn update(&mut self, msg: &Msg) {
        if !self.focus {
            return;
        }
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return;
        };

        let km = &self.key_map;
        if km.delete_character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if km.delete_character_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if km.delete_after_cursor.matches(key_msg) {
            self.value.truncate(self.pos);
        } else if km.delete_before_cursor.matches(key_msg) {
            self.value.drain(..self.pos);
            self.pos = 0;
        } else if km.character_backward.matches(key_msg) {
            self.pos = self.pos.saturating_sub(1);
        } else if km.character_forward.matches(key_msg) {
            self.set_cursor(self.pos + 1);
        } else if km.line_start.matches(key_msg) {
            self.pos = 0;
        } else if km.line_end.matches(key_msg) {
            self.pos = self.value.len();
        } else {
            self.handle_character_input(key_msg);
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        let KeyCode::Char(ch) = key_msg.key else {
            return;
        };
        if key_msg.modifiers.contains(KeyModifiers::CONTROL)
            || key_msg.modifiers.contains(KeyModifiers::ALT)
        {
            return;
        }
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            return;
        }
        self.value.insert(self.pos, ch);
        self.pos += 1;
    }

    /// Renders prompt, value and, when focused, the cursor.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);
        if self.value.is_empty() && !self.placeholder.is_empty() {
            let body = if self.focus {
                let mut chars = self.placeholder.chars();
                let first = chars.next().map(String::from).unwrap_or_default();
                let rest: String = chars.collect();
                format!(
                    "{}{}",
                    self.cursor_style.render(&first),
                    self.placeholder_style.render(&rest)
                )
            } else {
                self.placeholder_style.render(&self.placeholder)
            };
            return format!("{prompt}{body}");
        }

        if !self.focus {
            return format!("{prompt}{}", self.text_style.render(&self.value()));
        }

        let before: String = self.value[..self.pos].iter().collect();
        let under = self
            .value
            .get(self.pos)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = self.value.get(self.pos + 1..).unwrap_or(&[]).iter().collect();
        format!(
            "{prompt}{}{}{}",
            self.text_style.render(&before),
            self.cursor_style.render(&under),
            self.text_style.render(&after)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn ctrl(c: char) -> Msg {
        Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        })
    }

    fn typed(input: &mut Model, s: &str) {
        for c in s.chars() {
            input.update(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_new_default_values() {
        let input = new();
        assert_eq!(input.prompt, "> ");
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
        assert!(!input.focused());
    }

    #[test]
    fn test_blurred_input_ignores_keys() {
        let mut input = new();
        typed(&mut input, "abc");
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = new();
        input.focus();
        typed(&mut input, "admn");
        input.update(&key(KeyCode::Left));
        typed(&mut input, "i");
        assert_eq!(input.value(), "admin");
        input.update(&key(KeyCode::End));
        input.update(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "admi");
        assert_eq!(input.position(), 4);
    }

    #[test]
    fn test_line_editing_shortcuts() {
        let mut input = new();
        input.focus();
        input.set_value("hello world");
        input.set_cursor(5);
        input.update(&ctrl('k'));
        assert_eq!(input.value(), "hello");
        input.update(&ctrl('u'));
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_delete_forward_and_home() {
        let mut input = new();
        input.focus();
        input.set_value("xabc");
        input.update(&key(KeyCode::Home));
        input.update(&key(KeyCode::Delete));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_char_limit() {
        let mut input = new();
        input.char_limit = 3;
        input.focus();
        typed(&mut input, "abcdef");
        assert_eq!(input.value(), "abc");
        input.set_value("wxyz");
        assert_eq!(input.value(), "wxy");
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut input = new();
        input.focus();
        input.update(&ctrl('z'));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_view_shows_placeholder_when_empty() {
        let input = new().with_placeholder("Search here");
        let view = strip_ansi_escapes::strip_str(input.view());
        assert_eq!(view, "> Search here");
    }

    #[test]
    fn test_view_shows_value() {
        let mut input = new().with_prompt("Name: ");
        input.set_value("Jane");
        let view = strip_ansi_escapes::strip_str(input.view());
        assert_eq!(view, "Name: Jane");
    }
}
