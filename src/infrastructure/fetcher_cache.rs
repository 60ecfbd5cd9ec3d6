use std::{sync::Arc, time::Duration};

use log::debug;

use crate::{FetchOutcome, FetchRequest, RepositoryFetcher};

use super::TtlCache;

/// How long a fetch outcome is replayed before the upstream API is asked again.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// A fetcher that memoizes the outcome of another fetcher for a fixed duration.
///
/// Failures are cached like successes and replayed as-is until they expire.
pub struct FetcherCache {
    /// The fetcher whose outcomes are cached.
    fetcher: Arc<dyn RepositoryFetcher>,

    /// The cached outcomes, keyed by request.
    cache: TtlCache<FetchRequest, FetchOutcome>,
}

impl FetcherCache {
    /// Creates a new `FetcherCache` instance with the given time to live.
    pub fn new(fetcher: Arc<dyn RepositoryFetcher>, ttl: Duration) -> Self {
        Self {
            fetcher,
            cache: TtlCache::new(ttl),
        }
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for FetcherCache {
    /// Returns the cached outcome for the request, fetching it when absent or expired.
    async fn fetch(&self, request: &FetchRequest) -> FetchOutcome {
        if let Some(outcome) = self.cache.get(request).await {
            debug!("Cache hit for {request}");
            return outcome;
        }

        debug!("Cache miss for {request}");
        let outcome = self.fetcher.fetch(request).await;
        self.cache.insert(request.clone(), outcome.clone()).await;

        outcome
    }
}
