//! Layout dimension constants for TUI rendering.

/// Height of the search bar in lines (border + input line).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Text of the loading indicator.
pub const LOADING_MESSAGE: &str = "...loading cards...";

/// Lines scrolled per mouse wheel notch.
pub const MOUSE_SCROLL_LINES: usize = 3;
