//! Search input handling (pure state transitions).
//!
//! Every function that represents a keypress returns the field to `Idle`:
//! the error message disappears as soon as the user resumes typing.

use crate::state::{SearchCommit, SearchInputState, SearchStatus};

/// Insert a character at the cursor and advance the cursor.
pub fn handle_char_input(state: SearchInputState, ch: char) -> SearchInputState {
    let mut state = key_pressed(state);
    let at = state.cursor_byte_offset();
    state.value.insert(at, ch);
    state.cursor += 1;
    state
}

/// Delete the character before the cursor, if any.
pub fn handle_backspace(state: SearchInputState) -> SearchInputState {
    let mut state = key_pressed(state);
    if state.cursor > 0 {
        state.cursor -= 1;
        let at = state.cursor_byte_offset();
        state.value.remove(at);
    }
    state
}

/// Delete the character under the cursor, if any.
pub fn handle_delete(state: SearchInputState) -> SearchInputState {
    let mut state = key_pressed(state);
    if state.cursor < state.value.chars().count() {
        let at = state.cursor_byte_offset();
        state.value.remove(at);
    }
    state
}

/// Move cursor left by one character. Saturates at 0.
pub fn handle_cursor_left(state: SearchInputState) -> SearchInputState {
    let mut state = key_pressed(state);
    state.cursor = state.cursor.saturating_sub(1);
    state
}

/// Move cursor right by one character. Saturates at the end of the value.
pub fn handle_cursor_right(state: SearchInputState) -> SearchInputState {
    let mut state = key_pressed(state);
    let max_cursor = state.value.chars().count();
    state.cursor = (state.cursor + 1).min(max_cursor);
    state
}

/// Move cursor to the start of the value.
pub fn handle_cursor_home(state: SearchInputState) -> SearchInputState {
    let mut state = key_pressed(state);
    state.cursor = 0;
    state
}

/// Move cursor past the last character.
pub fn handle_cursor_end(state: SearchInputState) -> SearchInputState {
    let mut state = key_pressed(state);
    state.cursor = state.value.chars().count();
    state
}

/// Submit the current value.
///
/// An empty value is rejected: the field becomes `Invalid` and nothing is
/// committed. Otherwise the value is committed as-is. Whitespace is not
/// trimmed; a name of only spaces is sent to the server unchanged.
pub fn submit_search(state: SearchInputState) -> (SearchInputState, Option<SearchCommit>) {
    if state.value.is_empty() {
        let state = SearchInputState {
            status: SearchStatus::Invalid,
            ..state
        };
        return (state, None);
    }

    let commit = SearchCommit {
        name: state.value.clone(),
    };
    (key_pressed(state), Some(commit))
}

/// Clear the field and commit an empty filter.
pub fn reset_search(_state: SearchInputState) -> (SearchInputState, SearchCommit) {
    (SearchInputState::default(), SearchCommit::reset())
}

fn key_pressed(state: SearchInputState) -> SearchInputState {
    SearchInputState {
        status: SearchStatus::Idle,
        ..state
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
