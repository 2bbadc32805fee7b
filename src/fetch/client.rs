//! HTTP access to the card catalog.

use crate::fetch::PageRequest;
use crate::model::{CardPage, FetchError};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// Source of card pages.
///
/// Implementations block until the page is available; callers run them off
/// the UI thread.
pub trait CatalogClient: Send + Sync {
    /// Fetch one page.
    fn fetch_page(&self, request: &PageRequest) -> Result<CardPage, FetchError>;
}

/// `GET <base_url>?name=&page=&pageSize=` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
}

impl HttpCatalogClient {
    /// Build a client. `None` disables the request timeout.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the TLS backend cannot be initialized.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl CatalogClient for HttpCatalogClient {
    fn fetch_page(&self, request: &PageRequest) -> Result<CardPage, FetchError> {
        let url = request.display_url();
        tracing::debug!(%url, "requesting page");

        let response = self
            .client
            .get(&request.base_url)
            .query(&request.query_pairs())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<CardPage>()
            .map_err(|e| FetchError::Body {
                url,
                reason: e.to_string(),
            })
    }
}
