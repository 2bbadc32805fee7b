//! Catalog fetching.
//!
//! The UI thread owns all state. Requests run on worker threads and come
//! back as [`FetchReply`] values over a channel, which
//! [`FetchController::poll`] applies between frames.

pub mod client;
pub mod controller;
pub mod executor;
pub mod request;

pub use client::{CatalogClient, HttpCatalogClient};
pub use controller::FetchController;
pub use executor::{RequestExecutor, ThreadExecutor};
pub use request::PageRequest;

use crate::model::{CardPage, FetchError};
use serde::Deserialize;

/// How replies that finish out of order are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseOrdering {
    /// Apply in request order; a fast page 3 waits for a slow page 2.
    #[default]
    Sequenced,
    /// Apply as soon as each reply arrives.
    Arrival,
}

/// Identifies an issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket {
    /// Card collection generation when the request was issued.
    pub generation: u64,
    /// Issue order, unique across the controller's lifetime.
    pub sequence: u64,
}

/// Outcome of one request.
#[derive(Debug, Clone)]
pub struct FetchReply {
    /// Which request this answers.
    pub ticket: RequestTicket,
    /// What was asked for.
    pub request: PageRequest,
    /// The page, or why there is none.
    pub result: Result<CardPage, FetchError>,
}
