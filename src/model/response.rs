use super::{FetchError, RepositoryRecord};

/// The outcome of a repository fetch: either the complete list of records or a classified error.
pub type FetchOutcome = Result<Vec<RepositoryRecord>, FetchError>;
