//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    pub(crate) fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Vim-style scrolling
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);

        // Arrow keys
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Page navigation
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);

        // Search
        keys.bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::ResetSearch);
        keys.bind(KeyCode::Char('r'), KeyModifiers::CONTROL, KeyAction::ResetSearch);
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::CancelSearch);

        // Application
        keys.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        keys.bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
