//! UI state machine (pure).
//!
//! All state transitions are plain functions testable without a terminal.

pub mod app_state;
pub mod card_collection;
pub mod page_query;
pub mod scroll_handler;
pub mod scroll_sentinel;
pub mod search_input;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, FocusPane, ScrollState};
pub use card_collection::CardCollection;
pub use page_query::PageQuery;
pub use scroll_handler::{handle_scroll_action, Viewport};
pub use scroll_sentinel::ScrollSentinel;
pub use search_input::{SearchCommit, SearchInputState, SearchStatus, EMPTY_NAME_MESSAGE};
