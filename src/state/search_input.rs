//! Search field state.

use serde::{Deserialize, Serialize};

/// Message shown when an empty name is submitted.
pub const EMPTY_NAME_MESSAGE: &str = "please enter a name.";

/// Validation status of the search field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    /// No error displayed.
    #[default]
    Idle,
    /// Last submit was rejected; the error message is displayed.
    Invalid,
}

/// Text being edited in the search field.
///
/// `cursor` counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInputState {
    /// Current field contents.
    pub value: String,
    /// Cursor position in characters, `0..=value.chars().count()`.
    pub cursor: usize,
    /// Validation status.
    pub status: SearchStatus,
}

impl SearchInputState {
    /// Field pre-filled with `value`, cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            status: SearchStatus::Idle,
        }
    }

    /// Error text to display, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        match self.status {
            SearchStatus::Invalid => Some(EMPTY_NAME_MESSAGE),
            SearchStatus::Idle => None,
        }
    }

    /// Byte offset of the cursor within `value`.
    pub(crate) fn cursor_byte_offset(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// A name filter the user asked to apply.
///
/// An empty name clears the filter (the reset action).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCommit {
    /// Name to filter by.
    pub name: String,
}

impl SearchCommit {
    /// Commit that clears the filter.
    pub fn reset() -> Self {
        Self {
            name: String::new(),
        }
    }

    /// Whether this commit clears the filter.
    pub fn is_reset(&self) -> bool {
        self.name.is_empty()
    }
}
