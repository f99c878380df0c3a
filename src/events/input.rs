//! Input event types and key binding matching.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Other,
        }
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            shift: mods.contains(KeyModifiers::SHIFT),
        }
    }
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            modifiers: Modifiers::from(event.modifiers),
        }
    }
}

impl InputEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Get the character if this is a plain character input.
    pub fn char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Check this event against a binding string such as "q", "Ctrl+q",
    /// "Enter", or "Right".
    pub fn matches(&self, binding: &str) -> bool {
        let mut expected = Modifiers::default();
        let mut expected_key = "";

        for part in binding.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" => expected.ctrl = true,
                "alt" => expected.alt = true,
                "shift" => expected.shift = true,
                _ => expected_key = part,
            }
        }

        // Shift is part of the character itself for printable keys.
        let modifiers_match = if matches!(self.key, Key::Char(_)) {
            self.modifiers.ctrl == expected.ctrl && self.modifiers.alt == expected.alt
        } else {
            self.modifiers == expected
        };
        if !modifiers_match {
            return false;
        }

        match expected_key.to_lowercase().as_str() {
            "enter" => self.key == Key::Enter,
            "esc" | "escape" => self.key == Key::Escape,
            "backspace" => self.key == Key::Backspace,
            "tab" => self.key == Key::Tab,
            "backtab" => self.key == Key::BackTab,
            "up" => self.key == Key::Up,
            "down" => self.key == Key::Down,
            "left" => self.key == Key::Left,
            "right" => self.key == Key::Right,
            "home" => self.key == Key::Home,
            "end" => self.key == Key::End,
            "pageup" => self.key == Key::PageUp,
            "pagedown" => self.key == Key::PageDown,
            s if s.chars().count() == 1 => {
                let c = s.chars().next().unwrap_or('\0');
                self.key == Key::Char(c) || self.key == Key::Char(c.to_ascii_uppercase())
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(key: Key) -> InputEvent {
        InputEvent::new(key, Modifiers::default())
    }

    #[test]
    fn plain_characters_match_case_insensitively() {
        assert!(event(Key::Char('q')).matches("q"));
        assert!(event(Key::Char('Q')).matches("q"));
        assert!(!event(Key::Char('w')).matches("q"));
    }

    #[test]
    fn named_keys_match_their_binding_strings() {
        assert!(event(Key::Enter).matches("Enter"));
        assert!(event(Key::Escape).matches("esc"));
        assert!(event(Key::Right).matches("Right"));
        assert!(event(Key::BackTab).matches("BackTab"));
    }

    #[test]
    fn modifier_prefixes_are_required_when_named() {
        let ctrl_q = InputEvent::new(
            Key::Char('q'),
            Modifiers {
                ctrl: true,
                ..Default::default()
            },
        );
        assert!(ctrl_q.matches("Ctrl+q"));
        assert!(!ctrl_q.matches("q"));
        assert!(!event(Key::Char('q')).matches("Ctrl+q"));
    }

    #[test]
    fn shifted_characters_still_match_plain_bindings() {
        let shift_g = InputEvent::new(
            Key::Char('G'),
            Modifiers {
                shift: true,
                ..Default::default()
            },
        );
        assert!(shift_g.matches("G"));
    }
}
