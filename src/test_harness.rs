//! Acceptance test harness for TUI testing
//!
//! Provides a scripted request executor and a wrapper around
//! TuiApp<TestBackend> with convenient methods for simulating user
//! interactions and catalog replies.

use crate::fetch::{FetchController, FetchReply, PageRequest, RequestExecutor, RequestTicket, ResponseOrdering};
use crate::model::{Card, CardPage, FetchError};
use crate::state::{AppState, PageQuery};
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Sender;

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep assertions readable.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

// ===== ManualExecutor =====

struct Issued {
    ticket: RequestTicket,
    request: PageRequest,
    reply_to: Sender<FetchReply>,
}

/// Executor that records requests and replies only when told to.
///
/// Clones share the same log, so a test can keep one handle while the
/// controller owns another.
#[derive(Clone, Default)]
pub(crate) struct ManualExecutor {
    issued: Rc<RefCell<Vec<Issued>>>,
}

impl RequestExecutor for ManualExecutor {
    fn execute(&self, ticket: RequestTicket, request: PageRequest, reply_to: Sender<FetchReply>) {
        self.issued.borrow_mut().push(Issued {
            ticket,
            request,
            reply_to,
        });
    }
}

impl ManualExecutor {
    /// Requests issued so far, in issue order.
    pub(crate) fn requests(&self) -> Vec<PageRequest> {
        self.issued
            .borrow()
            .iter()
            .map(|i| i.request.clone())
            .collect()
    }

    /// Number of requests issued so far.
    pub(crate) fn count(&self) -> usize {
        self.issued.borrow().len()
    }

    /// Deliver the outcome of request `index`.
    pub(crate) fn resolve(&self, index: usize, result: Result<CardPage, FetchError>) {
        let issued = self.issued.borrow();
        let issued = &issued[index];
        issued
            .reply_to
            .send(FetchReply {
                ticket: issued.ticket,
                request: issued.request.clone(),
                result,
            })
            .expect("controller dropped its receiver");
    }

    /// Deliver a successful page for request `index`.
    pub(crate) fn succeed(&self, index: usize, cards: Vec<Card>) {
        self.resolve(index, Ok(CardPage::new(cards)));
    }
}

// ===== AcceptanceTestHarness =====

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub(crate) struct AcceptanceTestHarness {
    app: TuiApp<TestBackend, ManualExecutor>,
    executor: ManualExecutor,
    running: bool,
}

impl AcceptanceTestHarness {
    /// App on an 80x24 terminal against a fake endpoint, page size 20.
    /// The initial request has been issued and the first frame drawn.
    pub(crate) fn new() -> Self {
        Self::with_size(80, 24)
    }

    /// Same as [`AcceptanceTestHarness::new`] with a custom terminal size.
    pub(crate) fn with_size(width: u16, height: u16) -> Self {
        let executor = ManualExecutor::default();
        let fetch = FetchController::new(executor.clone(), ResponseOrdering::Sequenced);
        let state = AppState::new(PageQuery::new("https://api.test/v1/cards", 20));
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal");

        let mut app = TuiApp::new_for_test(terminal, state, fetch);
        app.tick_test().expect("initial draw");

        Self {
            app,
            executor,
            running: true,
        }
    }

    /// Press a key without modifiers and redraw.
    pub(crate) fn press(&mut self, code: KeyCode) {
        self.press_with(code, KeyModifiers::NONE);
    }

    /// Press a key with modifiers and redraw.
    pub(crate) fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.app.handle_key_test(KeyEvent::new(code, modifiers)) {
            self.running = false;
        }
        self.tick();
    }

    /// Type each character of `text`.
    pub(crate) fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    /// Deliver cards for request `index`, then run one loop pass.
    pub(crate) fn respond(&mut self, index: usize, cards: Vec<Card>) {
        self.executor.succeed(index, cards);
        self.tick();
    }

    /// Deliver a failure for request `index`, then run one loop pass.
    pub(crate) fn fail(&mut self, index: usize, error: FetchError) {
        self.executor.resolve(index, Err(error));
        self.tick();
    }

    /// One event loop pass without input.
    pub(crate) fn tick(&mut self) {
        let result: Result<(), TuiError> = self.app.tick_test();
        result.expect("draw");
    }

    /// Requests issued so far.
    pub(crate) fn requests(&self) -> Vec<PageRequest> {
        self.executor.requests()
    }

    /// Application state.
    pub(crate) fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Underlying app, for assertions the harness does not cover.
    pub(crate) fn app(&self) -> &TuiApp<TestBackend, ManualExecutor> {
        &self.app
    }

    /// Mutable app, for driving events the harness does not cover.
    pub(crate) fn app_mut(&mut self) -> &mut TuiApp<TestBackend, ManualExecutor> {
        &mut self.app
    }

    /// Whether the app is still running (quit not pressed).
    pub(crate) fn is_running(&self) -> bool {
        self.running
    }

    /// Current screen contents.
    pub(crate) fn screen(&self) -> String {
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}

/// `count` cards with names `"{prefix} 0"`, `"{prefix} 1"`, ...
pub(crate) fn named_cards(prefix: &str, count: usize) -> Vec<Card> {
    (0..count)
        .map(|i| Card::named(format!("{prefix}-{i}"), format!("{prefix} {i}")))
        .collect()
}
