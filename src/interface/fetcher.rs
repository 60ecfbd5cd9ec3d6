use crate::{FetchOutcome, FetchRequest};

/// A trait for fetching the repositories owned by an account.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches the repositories for the request.
    ///
    /// The outcome is either the complete list of records or one classified error.
    async fn fetch(&self, request: &FetchRequest) -> FetchOutcome;
}
