//! Screen layout rendering.
//!
//! Search bar on top, card list in the middle, status bar at the bottom.
//! The loading indicator and help overlay are drawn over the card list.

use crate::state::{AppState, FocusPane};
use crate::view::constants::{LOADING_MESSAGE, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use crate::view::help::{centered_fixed, render_help_overlay};
use crate::view::{cards, CardStyles, SearchInput};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rendering switches that come from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Show the last fetch error in the status bar.
    pub show_fetch_errors: bool,
}

/// Areas of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Search bar.
    pub search: Rect,
    /// Card list, borders included.
    pub cards: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split the frame into search bar, card list and status bar.
pub fn calculate_areas(frame_area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame_area);

    ScreenAreas {
        search: chunks[0],
        cards: chunks[1],
        status: chunks[2],
    }
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &CardStyles, options: LayoutOptions) {
    let areas = calculate_areas(frame.area());

    frame.render_widget(
        SearchInput::new(&state.search, state.focus == FocusPane::Search, styles),
        areas.search,
    );

    cards::render_card_list(frame, areas.cards, state, styles);

    if state.cards().is_fetching() {
        render_loading_indicator(frame, areas.cards, styles);
    }

    render_status_bar(frame, areas.status, state, styles, options);

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

fn render_loading_indicator(frame: &mut Frame, area: Rect, styles: &CardStyles) {
    let width = LOADING_MESSAGE.len() as u16 + 4;
    let popup = centered_fixed(width, 3, area);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(LOADING_MESSAGE, styles.name)).centered())
            .block(Block::default().borders(Borders::ALL)),
        popup,
    );
}

/// Text of the status bar, split into its left and right parts.
pub fn status_text(state: &AppState, options: LayoutOptions) -> (String, Option<String>) {
    let query = state.query();
    let mut left = format!(" page {} · {} cards", query.page(), state.cards().len());
    if let Some(total) = state.total_count() {
        left.push_str(&format!(" of {total}"));
    }
    if !query.search_name().is_empty() {
        left.push_str(&format!(" · name: {}", query.search_name()));
    }

    let error = options
        .show_fetch_errors
        .then(|| state.last_fetch_error())
        .flatten()
        .map(|e| format!(" · fetch failed: {}", e.summary()));

    (left, error)
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &CardStyles,
    options: LayoutOptions,
) {
    let (left, error) = status_text(state, options);

    let mut spans = vec![Span::styled(left, styles.value)];
    if let Some(error) = error {
        spans.push(Span::styled(error, styles.error));
    }
    spans.push(Span::styled("  ? help  q quit", styles.muted));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
