//! Pagination and search parameters.
//!
//! `PageQuery` is the single source of truth for what the next catalog
//! request looks like. Fields are private; the only way to change them is
//! through the named transitions below, each of which bumps `revision`.

use crate::fetch::PageRequest;
use serde::{Deserialize, Serialize};

/// Current request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    base_url: String,
    page: u32,
    page_size: u32,
    search_name: String,
    revision: u64,
}

impl PageQuery {
    /// Query for page 1 of the unfiltered catalog.
    pub fn new(base_url: impl Into<String>, page_size: u32) -> Self {
        Self {
            base_url: base_url.into(),
            page: 1,
            page_size,
            search_name: String::new(),
            revision: 0,
        }
    }

    /// Same query, starting with a name filter already applied.
    pub fn with_search_name(mut self, name: impl Into<String>) -> Self {
        self.search_name = name.into();
        self
    }

    /// Catalog endpoint. Never changes after construction.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Page to request, 1-based.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Cards per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Name filter; empty means no filter.
    pub fn search_name(&self) -> &str {
        &self.search_name
    }

    /// Number of transitions applied so far.
    ///
    /// Two queries with equal values but different revisions are distinct
    /// requests: re-committing the same filter must refetch page 1 because
    /// the card list was cleared.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// `page := 1`
    pub fn reset_page(&mut self) {
        self.page = 1;
        self.touch();
    }

    /// `page := page + 1`
    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
        self.touch();
    }

    /// `search_name := name`. The empty string clears the filter.
    pub fn set_search_name(&mut self, name: impl Into<String>) {
        self.search_name = name.into();
        self.touch();
    }

    /// Request for the current parameters.
    pub fn request(&self) -> PageRequest {
        PageRequest::new(
            self.base_url.clone(),
            self.page,
            self.page_size,
            &self.search_name,
        )
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
