//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that key bindings map to.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Keys typed while the search field has focus are handled as text and never
/// reach this mapping, except for the few the field does not consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the card list up by one line. Default: k/↑
    ScrollUp,
    /// Scroll the card list down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one screen. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one screen. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first card. Default: g/Home
    ScrollToTop,
    /// Jump to the end of the loaded cards. Default: G/End
    ScrollToBottom,

    // Search
    /// Move focus into the search field. Default: /
    StartSearch,
    /// Clear the name filter and start over from page 1. Default: r
    ResetSearch,
    /// Leave the search field without committing. Only acts while the
    /// search field has focus. Default: Esc
    CancelSearch,

    // Application
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action only moves the card viewport.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}
