//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es under a single action and
//! carries the short help text shown in the help bar. Key maps implement the
//! [`KeyMap`] trait so the help bar can be generated from them.
//!
//! ```rust
//! use admin_dashboard::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let quit = Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit");
//! let force_quit = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+c", "force quit");
//! assert_eq!(quit.help().desc, "quit");
//! assert!(force_quit.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl KeyPress {
    /// Parses a key description such as `"enter"`, `"G"` or `"ctrl+c"`.
    ///
    /// Returns `None` for descriptions that do not name a known key.
    pub fn parse(s: &str) -> Option<Self> {
        let mut mods = KeyModifiers::NONE;
        let mut rest = s;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                mods |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                mods |= KeyModifiers::ALT;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("shift+") {
                mods |= KeyModifiers::SHIFT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "space" => KeyCode::Char(' '),
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(Self { code, mods })
    }

    /// Reports whether a key message is this key press.
    ///
    /// Shift is ignored for character keys because terminals already report
    /// the shifted character (`G` rather than `shift+g`).
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let mut mods = msg.modifiers;
        if matches!(msg.key, KeyCode::Char(_)) {
            mods.remove(KeyModifiers::SHIFT);
        }
        mods == self.mods
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↑/k"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are hidden from help.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether a key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
///
/// ```rust
/// use admin_dashboard::key::{new_binding, with_help, with_keys_str};
///
/// let b = new_binding(vec![with_keys_str(&["ctrl+c"]), with_help("ctrl+c", "quit")]);
/// assert_eq!(b.keys().len(), 1);
/// ```
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the keys of a binding from key descriptions. Unknown descriptions
/// are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b: &mut Binding| b.keys = parsed)
}

/// Sets the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Reports whether a key message matches any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Key maps that can describe themselves to the help bar.
pub trait KeyMap {
    /// Bindings shown in the single-line help.
    fn short_help(&self) -> Vec<&Binding>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_and_modified_keys() {
        assert_eq!(
            KeyPress::parse("enter"),
            Some(KeyPress::from(KeyCode::Enter))
        );
        assert_eq!(
            KeyPress::parse("ctrl+c"),
            Some(KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)))
        );
        assert_eq!(
            KeyPress::parse("space"),
            Some(KeyPress::from(KeyCode::Char(' ')))
        );
        assert_eq!(KeyPress::parse("bogus"), None);
    }

    #[test]
    fn test_binding_matches_any_of_its_keys() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up");
        assert!(b.matches(&key(KeyCode::Up, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Char('j'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Char('k'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_shift_is_ignored_for_characters() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]);
        b.set_enabled(false);
        assert!(!b.enabled());
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_new_binding_options() {
        let b = new_binding(vec![with_keys_str(&["esc", "q"]), with_help("q", "quit")]);
        assert_eq!(b.keys().len(), 2);
        assert_eq!(b.help().key, "q");
        assert!(matches(
            &key(KeyCode::Esc, KeyModifiers::NONE),
            &[&Binding::default(), &b]
        ));
    }
}
