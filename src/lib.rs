//! Elder Scrolls Legends card browser (eslcards)
//!
//! TUI application that pages through the public card catalog, filters it
//! by name, and loads more cards as the end of the list scrolls into view.
//!
//! The state core (`state`) is pure and testable without a terminal; the
//! `fetch` layer runs HTTP requests off the UI thread; `view` is the
//! impure shell that draws frames and reads input.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;
