//! Catalog request description.

use reqwest::Url;

/// One page request against the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Catalog endpoint, without query string.
    pub base_url: String,
    /// Page number, 1-based.
    pub page: u32,
    /// Cards per page.
    pub page_size: u32,
    /// Name filter. `None` means the parameter is omitted.
    pub name: Option<String>,
}

impl PageRequest {
    /// Build a request. An empty `name` means no filter.
    pub fn new(base_url: impl Into<String>, page: u32, page_size: u32, name: &str) -> Self {
        Self {
            base_url: base_url.into(),
            page,
            page_size,
            name: (!name.is_empty()).then(|| name.to_string()),
        }
    }

    /// Query parameters in wire form.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("pageSize", self.page_size.to_string()));
        pairs
    }

    /// Full URL for logs and error messages. Falls back to the bare base URL
    /// when it does not parse.
    pub fn display_url(&self) -> String {
        Url::parse_with_params(&self.base_url, self.query_pairs())
            .map(String::from)
            .unwrap_or_else(|_| self.base_url.clone())
    }
}
