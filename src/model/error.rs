use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Classified failure of a repository fetch.
///
/// Every variant is terminal for the render cycle that produced it: nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The upstream API answered with HTTP 403.
    #[error("GitHub API rate limit exceeded. Please try again later.")]
    RateLimited,

    /// The upstream API answered with HTTP 404.
    #[error("GitHub user not found. Please check the username.")]
    NotFound,

    /// The upstream API answered with any other non-success status.
    #[error("GitHub API returned status code: {0}")]
    UpstreamError(u16),

    /// The request did not complete before the client timeout.
    #[error("Request timed out. Please check your internet connection.")]
    Timeout,

    /// The connection to the upstream API could not be established.
    #[error("Connection error. Please check your internet connection.")]
    ConnectionFailed,

    /// Anything else, including an unparsable response body.
    #[error("Error: {0}")]
    Unknown(String),
}

impl FetchError {
    /// Classifies a non-success HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            403 => Self::RateLimited,
            404 => Self::NotFound,
            status => Self::UpstreamError(status),
        }
    }
}
