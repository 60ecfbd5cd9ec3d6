use std::time::Duration;

use anyhow::{Context, anyhow};
use log::{debug, warn};
use reqwest::{
    Client, StatusCode, Url,
    header::{ACCEPT, HeaderMap, HeaderValue},
};

use crate::{FetchError, FetchOutcome, FetchRequest, RepositoryFetcher, RepositoryRecord, StdResult};

/// The REST production endpoint for GitHub.
pub const GITHUB_REST_ENDPOINT: &str = "https://api.github.com";

/// The default timeout of a listing request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_connect() {
            FetchError::ConnectionFailed
        } else {
            FetchError::Unknown(error.to_string())
        }
    }
}

/// Fetches the repositories of an account from the GitHub REST listing endpoint.
#[derive(Debug)]
pub struct RestFetcher {
    client: Client,
    endpoint: Url,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` against the given API root.
    pub fn try_new(endpoint: &str, timeout: Duration) -> StdResult<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid API endpoint: {endpoint}"))?;
        if endpoint.cannot_be_a_base() {
            return Err(anyhow!("API endpoint cannot be used as a base URL: {endpoint}"));
        }
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON_MEDIA_TYPE));
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .with_context(|| "Failed to build the HTTP client")?;

        Ok(Self { client, endpoint })
    }

    fn repositories_url(&self, handle: &str) -> Result<Url, FetchError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Unknown(format!("Invalid API endpoint: {}", self.endpoint)))?
            .pop_if_empty()
            .extend(["users", handle, "repos"]);

        Ok(url)
    }

    async fn fetch_repositories(&self, request: &FetchRequest) -> FetchOutcome {
        let url = self.repositories_url(request.handle())?;
        let per_page = request.per_page().to_string();
        let response = self
            .client
            .get(url)
            .query(&[
                ("sort", "updated"),
                ("per_page", per_page.as_str()),
                ("type", "owner"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::from_status(status.as_u16()));
        }
        let body = response.bytes().await?;

        serde_json::from_slice::<Vec<RepositoryRecord>>(&body)
            .map_err(|e| FetchError::Unknown(format!("Failed to parse response: {e}")))
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for RestFetcher {
    async fn fetch(&self, request: &FetchRequest) -> FetchOutcome {
        debug!("Fetching {request}");
        let outcome = self.fetch_repositories(request).await;
        match &outcome {
            Ok(records) => debug!("Fetched {} repositories for {request}", records.len()),
            Err(e) => warn!("Failed to fetch repositories for {request}: {e}"),
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;

    fn mock_json_value() -> serde_json::Value {
        json!([
            {
                "name": "repository-1",
                "description": "First repository",
                "language": "Rust",
                "stargazers_count": 100,
                "forks_count": 4,
                "updated_at": "2025-01-05T10:20:30Z",
                "html_url": "https://github.com/octocat/repository-1",
                "fork": false
            },
            {
                "name": "repository-2",
                "description": null,
                "language": null,
                "stargazers_count": 0,
                "forks_count": 0,
                "updated_at": "2024-11-30T08:00:00Z",
                "html_url": "https://github.com/octocat/repository-2",
                "fork": false
            }
        ])
    }

    async fn fetch_with_status(status: u16) -> FetchOutcome {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/users/octocat/repos");
                then.status(status);
            })
            .await;
        let fetcher = RestFetcher::try_new(&server.base_url(), DEFAULT_FETCH_TIMEOUT).unwrap();

        let outcome = fetcher.fetch(&FetchRequest::dummy()).await;

        mock.assert_async().await;
        outcome
    }

    #[tokio::test]
    async fn fetch_repositories_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/users/octocat/repos")
                    .query_param("sort", "updated")
                    .query_param("per_page", "6")
                    .query_param("type", "owner")
                    .header_exists("user-agent");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(mock_json_value());
            })
            .await;
        let fetcher = RestFetcher::try_new(&server.base_url(), DEFAULT_FETCH_TIMEOUT).unwrap();

        let records = fetcher.fetch(&FetchRequest::dummy()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            vec![
                RepositoryRecord::new(
                    "repository-1",
                    Some("First repository"),
                    Some("Rust"),
                    100,
                    4,
                    "2025-01-05T10:20:30Z",
                    "https://github.com/octocat/repository-1",
                ),
                RepositoryRecord::new(
                    "repository-2",
                    None,
                    None,
                    0,
                    0,
                    "2024-11-30T08:00:00Z",
                    "https://github.com/octocat/repository-2",
                ),
            ],
            records
        );
    }

    #[tokio::test]
    async fn fetch_without_page_limit_requests_max_page_size() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/users/octocat/repos")
                    .query_param("per_page", "100");
                then.status(200).json_body(json!([]));
            })
            .await;
        let fetcher = RestFetcher::try_new(&server.base_url(), DEFAULT_FETCH_TIMEOUT).unwrap();
        let request = FetchRequest::try_new("octocat", None).unwrap();

        let records = fetcher.fetch(&request).await.unwrap();

        mock.assert_async().await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn fetch_rate_limited() {
        assert_eq!(Err(FetchError::RateLimited), fetch_with_status(403).await);
    }

    #[tokio::test]
    async fn fetch_not_found() {
        assert_eq!(Err(FetchError::NotFound), fetch_with_status(404).await);
    }

    #[tokio::test]
    async fn fetch_upstream_error() {
        assert_eq!(
            Err(FetchError::UpstreamError(500)),
            fetch_with_status(500).await
        );
    }

    #[tokio::test]
    async fn fetch_malformed_body_is_unknown_error_without_partial_records() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/users/octocat/repos");
                then.status(200).json_body(json!([
                    {
                        "name": "repository-1",
                        "description": null,
                        "language": null,
                        "stargazers_count": 1,
                        "forks_count": 0,
                        "updated_at": "2025-01-05T10:20:30Z",
                        "html_url": "https://github.com/octocat/repository-1"
                    },
                    { "name": "truncated" }
                ]));
            })
            .await;
        let fetcher = RestFetcher::try_new(&server.base_url(), DEFAULT_FETCH_TIMEOUT).unwrap();

        let outcome = fetcher.fetch(&FetchRequest::dummy()).await;

        assert!(matches!(outcome, Err(FetchError::Unknown(_))));
    }

    #[tokio::test]
    async fn fetch_timeout() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/users/octocat/repos");
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .json_body(json!([]));
            })
            .await;
        let fetcher =
            RestFetcher::try_new(&server.base_url(), Duration::from_millis(50)).unwrap();

        let outcome = fetcher.fetch(&FetchRequest::dummy()).await;

        assert_eq!(Err(FetchError::Timeout), outcome);
    }

    #[tokio::test]
    async fn fetch_connection_failed() {
        let address = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let fetcher =
            RestFetcher::try_new(&format!("http://{address}"), DEFAULT_FETCH_TIMEOUT).unwrap();

        let outcome = fetcher.fetch(&FetchRequest::dummy()).await;

        assert_eq!(Err(FetchError::ConnectionFailed), outcome);
    }

    #[test]
    fn builds_repositories_url_under_endpoint_path() {
        let fetcher =
            RestFetcher::try_new("https://ghe.example.com/api/v3/", DEFAULT_FETCH_TIMEOUT)
                .unwrap();

        let url = fetcher.repositories_url("octocat").unwrap();

        assert_eq!(
            "https://ghe.example.com/api/v3/users/octocat/repos",
            url.as_str()
        );
    }

    #[test]
    fn rejects_invalid_endpoint() {
        RestFetcher::try_new("not a url", DEFAULT_FETCH_TIMEOUT).expect_err("Expected an error");
    }
}
