use std::fmt::Display;

use anyhow::anyhow;

use super::StdResult;

/// The largest page size the upstream listing endpoint accepts.
pub const MAX_PAGE_SIZE: u16 = 100;

/// A request for the repositories owned by an account.
///
/// Two requests are equal when both the handle and the page limit match, which makes this
/// type the key of the fetch cache.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct FetchRequest {
    /// The account handle.
    pub(crate) handle: String,

    /// The maximum number of repositories to return, `None` meaning the largest page.
    pub(crate) page_limit: Option<u16>,
}

impl FetchRequest {
    /// Creates a new `FetchRequest`, rejecting an empty handle or a zero page limit.
    pub fn try_new(handle: &str, page_limit: Option<u16>) -> StdResult<Self> {
        let handle = handle.trim();
        if handle.is_empty() {
            return Err(anyhow!("The account handle must not be empty"));
        }
        if page_limit == Some(0) {
            return Err(anyhow!("The page limit must be a positive integer"));
        }

        Ok(Self {
            handle: handle.to_string(),
            page_limit,
        })
    }

    /// Retrieves the account handle.
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Retrieves the page limit.
    pub fn page_limit(&self) -> Option<u16> {
        self.page_limit
    }

    /// The `per_page` value sent upstream.
    pub fn per_page(&self) -> u16 {
        self.page_limit
            .map(|limit| limit.min(MAX_PAGE_SIZE))
            .unwrap_or(MAX_PAGE_SIZE)
    }

    /// Creates a dummy `FetchRequest` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self {
            handle: "octocat".to_string(),
            page_limit: Some(6),
        }
    }
}

impl Display for FetchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FetchRequest: handle={}, page_limit={:?}",
            self.handle, self.page_limit
        )
    }
}
