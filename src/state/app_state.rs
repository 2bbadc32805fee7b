//! Application state and transitions.
//!
//! AppState is the root state type. It owns the query and the card
//! collection and exposes the controller operations that change them.

use crate::model::{CardPage, FetchError};
use crate::state::search_input_handler;
use crate::state::{CardCollection, PageQuery, SearchCommit, SearchInputState};

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Transitions
///
/// - Search commit: `search_name := name`, cards cleared, `page := 1`,
///   applied together so the next request sees all three.
/// - Next page: `page := page + 1`, cards kept.
/// - Focus: Cards ⇄ Search (via `focus_search`, `focus_cards`)
#[derive(Debug, Clone)]
pub struct AppState {
    query: PageQuery,
    cards: CardCollection,

    /// Which pane currently has keyboard focus.
    pub focus: FocusPane,

    /// Search field contents and validation status.
    pub search: SearchInputState,

    /// Vertical scroll position of the card list.
    pub scroll: ScrollState,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    last_fetch_error: Option<FetchError>,
    total_count: Option<u64>,
}

impl AppState {
    /// Create state for a query. Cards start empty; the search field shows
    /// the query's current filter.
    pub fn new(query: PageQuery) -> Self {
        let search = SearchInputState::with_value(query.search_name());
        Self {
            query,
            cards: CardCollection::new(),
            focus: FocusPane::Cards,
            search,
            scroll: ScrollState::default(),
            help_visible: false,
            last_fetch_error: None,
            total_count: None,
        }
    }

    /// Current request parameters.
    pub fn query(&self) -> &PageQuery {
        &self.query
    }

    /// Cards loaded so far.
    pub fn cards(&self) -> &CardCollection {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut CardCollection {
        &mut self.cards
    }

    /// Most recent failed request, cleared by the next success.
    pub fn last_fetch_error(&self) -> Option<&FetchError> {
        self.last_fetch_error.as_ref()
    }

    /// Catalog size reported by the server for the current filter.
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Apply a search commit: new filter, empty list, page 1.
    pub fn commit_search(&mut self, commit: SearchCommit) {
        tracing::debug!(name = %commit.name, reset = commit.is_reset(), "search committed");
        self.query.set_search_name(commit.name);
        self.cards.clear();
        self.query.reset_page();
        self.scroll = ScrollState::default();
        self.total_count = None;
    }

    /// Advance to the next page.
    pub fn next_page(&mut self) {
        self.query.next_page();
        tracing::debug!(page = self.query.page(), "next page requested");
    }

    /// Submit the search field. Returns whether a filter was committed.
    pub fn submit_search(&mut self) -> bool {
        let (search, commit) = search_input_handler::submit_search(std::mem::take(&mut self.search));
        self.search = search;
        match commit {
            Some(commit) => {
                self.commit_search(commit);
                true
            }
            None => false,
        }
    }

    /// Clear the search field and the filter.
    pub fn reset_search(&mut self) {
        let (search, commit) = search_input_handler::reset_search(std::mem::take(&mut self.search));
        self.search = search;
        self.commit_search(commit);
    }

    /// Append a successfully fetched page.
    pub fn apply_page(&mut self, page: CardPage) {
        if page.total_count.is_some() {
            self.total_count = page.total_count;
        }
        self.cards.append_cards(page.cards);
        self.last_fetch_error = None;
    }

    /// Remember a failed request. Cards and query are left untouched.
    pub fn record_fetch_error(&mut self, error: FetchError) {
        self.last_fetch_error = Some(error);
    }

    /// Give keyboard focus to the search field.
    pub fn focus_search(&mut self) {
        self.focus = FocusPane::Search;
    }

    /// Give keyboard focus back to the card list.
    pub fn focus_cards(&mut self) {
        self.focus = FocusPane::Cards;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

// ===== FocusPane =====

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusPane {
    /// Card list; keys scroll.
    #[default]
    Cards,
    /// Search field; keys edit the name.
    Search,
}

// ===== ScrollState =====

/// Line offset of the card list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// First visible line.
    pub offset: usize,
}

impl ScrollState {
    /// Scroll up, saturating at the top.
    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    /// Scroll down, saturating at `max`.
    pub fn scroll_down(&mut self, amount: usize, max: usize) {
        self.offset = self.offset.saturating_add(amount).min(max);
    }

    /// Jump so the last line is at the bottom of the viewport.
    pub fn scroll_to_bottom(&mut self, max: usize) {
        self.offset = max;
    }

    /// Pull the offset back inside `0..=max`.
    pub fn clamp(&mut self, max: usize) {
        self.offset = self.offset.min(max);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
