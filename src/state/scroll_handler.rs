//! Vertical scrolling keyboard action handler.
//!
//! Transforms AppState in place in response to scroll actions.

use crate::model::KeyAction;
use crate::state::{AppState, FocusPane};

/// Dimensions of the card list as last rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Visible lines.
    pub height: usize,
    /// Total lines of content, including the marker row.
    pub content_height: usize,
}

impl Viewport {
    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.height)
    }
}

/// Handle a scroll keyboard action.
///
/// Ignored while the search field has focus. Non-scroll actions are a
/// no-op.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction, viewport: Viewport) {
    if state.focus == FocusPane::Search {
        return;
    }

    let max = viewport.max_offset();
    let page = viewport.height.saturating_sub(1).max(1);

    match action {
        KeyAction::ScrollUp => state.scroll.scroll_up(1),
        KeyAction::ScrollDown => state.scroll.scroll_down(1, max),
        KeyAction::PageUp => state.scroll.scroll_up(page),
        KeyAction::PageDown => state.scroll.scroll_down(page, max),
        KeyAction::ScrollToTop => state.scroll.offset = 0,
        KeyAction::ScrollToBottom => state.scroll.scroll_to_bottom(max),
        _ => {}
    }
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
