//! TUI rendering and terminal management (impure shell)

pub mod cards;
pub mod constants;
mod help;
pub mod layout;
mod search_input;
mod styles;

pub use help::render_help_overlay;
pub use layout::{LayoutOptions, ScreenAreas};
pub use search_input::SearchInput;
pub use styles::{CardStyles, ColorConfig};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::fetch::{FetchController, HttpCatalogClient, RequestExecutor, ThreadExecutor};
use crate::model::{AppError, KeyAction};
use crate::state::{
    handle_scroll_action, search_input_handler, AppState, FocusPane, PageQuery, ScrollSentinel,
    Viewport,
};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// request executor so tests can decide when replies arrive.
pub struct TuiApp<B, E>
where
    B: ratatui::backend::Backend,
    E: RequestExecutor,
{
    terminal: Terminal<B>,
    app_state: AppState,
    fetch: FetchController<E>,
    sentinel: ScrollSentinel,
    key_bindings: KeyBindings,
    styles: CardStyles,
    options: LayoutOptions,
    /// Card list dimensions from the last draw (for scrolling)
    viewport: Viewport,
    /// Last rendered screen areas (for mouse click detection)
    last_areas: Option<ScreenAreas>,
}

impl<E: RequestExecutor> TuiApp<CrosstermBackend<Stdout>, E> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        fetch: FetchController<E>,
        styles: CardStyles,
        options: LayoutOptions,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            fetch,
            KeyBindings::default(),
            styles,
            options,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws on input, resize, or
    /// when a reply changes the state; otherwise idles on the event poll.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(50);

        // Initial load
        self.fetch.sync(&mut self.app_state);
        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(()); // User quit
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if self.update() {
                dirty = true;
            }

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B, E> TuiApp<B, E>
where
    B: ratatui::backend::Backend,
    E: RequestExecutor,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        fetch: FetchController<E>,
        key_bindings: KeyBindings,
        styles: CardStyles,
        options: LayoutOptions,
    ) -> Self {
        Self {
            terminal,
            app_state,
            fetch,
            sentinel: ScrollSentinel::new(),
            key_bindings,
            styles,
            options,
            viewport: Viewport::default(),
            last_areas: None,
        }
    }

    /// Fold finished replies into the state and issue the request for any
    /// query change. Returns whether anything changed.
    fn update(&mut self) -> bool {
        let applied = self.fetch.poll(&mut self.app_state);
        let issued = self.fetch.sync(&mut self.app_state);
        applied || issued
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.app_state.toggle_help();
            }
            return false;
        }

        if self.app_state.focus == FocusPane::Search {
            self.handle_search_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(KeyEvent::new(key.code, key.modifiers)) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::StartSearch => self.app_state.focus_search(),
            KeyAction::ResetSearch => self.app_state.reset_search(),
            scroll if scroll.is_scroll() => {
                handle_scroll_action(&mut self.app_state, scroll, self.viewport)
            }
            _ => {}
        }

        false
    }

    /// Keys while the search field has focus edit the field.
    ///
    /// The key bound to [`KeyAction::CancelSearch`] leaves the field with its
    /// text kept and nothing committed.
    fn handle_search_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        let bound = self.key_bindings.get(KeyEvent::new(key.code, key.modifiers));
        if bound == Some(KeyAction::CancelSearch) {
            self.app_state.focus_cards();
            return;
        }

        match key.code {
            KeyCode::Enter => {
                if self.app_state.submit_search() {
                    self.app_state.focus_cards();
                }
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.app_state.reset_search();
                return;
            }
            _ => {}
        }

        let search = std::mem::take(&mut self.app_state.search);
        self.app_state.search = match key.code {
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                search_input_handler::handle_char_input(search, ch)
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(search),
            KeyCode::Delete => search_input_handler::handle_delete(search),
            KeyCode::Left => search_input_handler::handle_cursor_left(search),
            KeyCode::Right => search_input_handler::handle_cursor_right(search),
            KeyCode::Home => search_input_handler::handle_cursor_home(search),
            KeyCode::End => search_input_handler::handle_cursor_end(search),
            _ => search,
        };
    }

    /// Handle a single mouse event
    ///
    /// Wheel scrolls the card list; a click on the search bar focuses it,
    /// a click on the card list focuses the list.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                let action = if mouse.kind == MouseEventKind::ScrollDown {
                    KeyAction::ScrollDown
                } else {
                    KeyAction::ScrollUp
                };
                for _ in 0..constants::MOUSE_SCROLL_LINES {
                    handle_scroll_action(&mut self.app_state, action, self.viewport);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(areas) = self.last_areas else {
                    return;
                };
                if contains(areas.search, mouse.column, mouse.row) {
                    self.app_state.focus_search();
                } else if contains(areas.cards, mouse.column, mouse.row) {
                    self.app_state.focus_cards();
                }
            }
            _ => {}
        }
    }

    /// Render the current frame, then check whether the end-of-list marker
    /// came into view.
    ///
    /// A marker entering view asks for the next page; the request is issued
    /// at once and the frame is redrawn to show the loading indicator.
    fn draw(&mut self) -> Result<(), TuiError> {
        self.render()?;
        self.observe_sentinel();
        if self.fetch.sync(&mut self.app_state) {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let areas = layout::calculate_areas(frame_area);
        self.last_areas = Some(areas);

        self.viewport = cards::list_viewport(areas.cards, self.app_state.cards().items());
        self.app_state.scroll.clamp(self.viewport.max_offset());

        let state = &self.app_state;
        let styles = &self.styles;
        let options = self.options;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles, options);
        })?;

        Ok(())
    }

    fn observe_sentinel(&mut self) {
        self.sentinel
            .sync_marker(!self.app_state.cards().is_empty());

        let ratio = cards::sentinel_intersection(
            self.app_state.scroll.offset,
            self.viewport.height,
            self.viewport.content_height,
        );

        let app_state = &mut self.app_state;
        self.sentinel.observe(ratio, || app_state.next_page());
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used by every test
impl<B, E> TuiApp<B, E>
where
    B: ratatui::backend::Backend,
    E: RequestExecutor,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        fetch: FetchController<E>,
    ) -> Self {
        Self::with_terminal(
            terminal,
            app_state,
            fetch,
            KeyBindings::default(),
            CardStyles::default(),
            LayoutOptions::default(),
        )
    }

    /// Replace the key map (test-only).
    pub(crate) fn set_key_bindings_test(&mut self, key_bindings: KeyBindings) {
        self.key_bindings = key_bindings;
    }

    /// Set rendering options (test-only).
    pub(crate) fn set_options_test(&mut self, options: LayoutOptions) {
        self.options = options;
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Get reference to the fetch controller (test-only accessor)
    pub(crate) fn fetch(&self) -> &FetchController<E> {
        &self.fetch
    }

    /// Get reference to the sentinel (test-only accessor)
    pub(crate) fn sentinel(&self) -> &ScrollSentinel {
        &self.sentinel
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse);
    }

    /// One pass of the event loop without input: apply replies, issue
    /// requests, redraw.
    pub(crate) fn tick_test(&mut self) -> Result<(), TuiError> {
        self.update();
        self.draw()
    }

    /// Render the current state (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Startup choices made on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Name filter applied before the first request.
    pub initial_search: Option<String>,
    /// Disable colors (`--no-color`).
    pub no_color: bool,
}

/// Initialize and run the TUI application with resolved configuration
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: &ResolvedConfig, launch: LaunchOptions) -> Result<(), TuiError> {
    let client = HttpCatalogClient::new(config.request_timeout).map_err(AppError::Client)?;
    let fetch = FetchController::new(ThreadExecutor::new(Arc::new(client)), config.response_ordering);

    let mut query = PageQuery::new(config.base_url.clone(), config.page_size);
    if let Some(name) = launch.initial_search.filter(|n| !n.is_empty()) {
        query = query.with_search_name(name);
    }

    info!(
        base_url = %config.base_url,
        page_size = config.page_size,
        ordering = ?config.response_ordering,
        "starting card browser"
    );

    let styles = CardStyles::with_color_config(ColorConfig::from_env_and_args(launch.no_color));
    let options = LayoutOptions {
        show_fetch_errors: config.show_fetch_errors,
    };

    let result = TuiApp::new(AppState::new(query), fetch, styles, options).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
