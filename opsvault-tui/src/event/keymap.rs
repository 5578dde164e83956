//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key bindings.
pub struct DefaultKeymap;

impl DefaultKeymap {
    // global
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // records
    pub const ACTION_ADD: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const ACTION_BATCH_DELETE: KeyBinding = KeyBinding::new(
        KeyModifiers::ALT.union(KeyModifiers::SHIFT),
        KeyCode::Char('D'),
    );
    pub const ACTION_IMPORT: KeyBinding = KeyBinding::alt(KeyCode::Char('i'));
    pub const ACTION_EXPORT: KeyBinding = KeyBinding::alt(KeyCode::Char('x'));
    pub const TOGGLE_SELECT: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const SELECT_ALL: KeyBinding = KeyBinding::alt(KeyCode::Char(' '));
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const REVEAL: KeyBinding = KeyBinding::alt(KeyCode::Char('v'));
    pub const COPY: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));

    // modal
    pub const TOGGLE_SECRETS: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const GENERATE: KeyBinding = KeyBinding::alt(KeyCode::Char('g'));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        let mut event = KeyEvent::new(code, modifiers);
        event.kind = KeyEventKind::Press;
        event
    }

    #[test]
    fn bindings_require_exact_modifiers() {
        assert!(DefaultKeymap::ACTION_ADD.matches(&press(KeyModifiers::ALT, KeyCode::Char('a'))));
        assert!(!DefaultKeymap::ACTION_ADD.matches(&press(KeyModifiers::NONE, KeyCode::Char('a'))));
        assert!(DefaultKeymap::ACTION_BATCH_DELETE.matches(&press(
            KeyModifiers::ALT | KeyModifiers::SHIFT,
            KeyCode::Char('D'),
        )));
    }
}
