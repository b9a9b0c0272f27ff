//! HTTP user source
//!
//! Unified processing of the single user request: building the URL, sending,
//! logging, status check and JSON parsing. Errors are mapped onto
//! [`FetchError`] and never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::UserSource;
use crate::error::FetchError;
use crate::types::{UserRecord, UsersResponse};
use crate::utils::truncate_for_log;

/// Public random-user generator
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// Batch size requested when nothing else is configured
pub const DEFAULT_RESULTS: u32 = 100;

/// Upper bound accepted by the random-user API for `results`
pub const MAX_RESULTS: u32 = 5000;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to fetch users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Endpoint URL, possibly already carrying query parameters
    pub endpoint: String,
    /// Value of the `results` query parameter; `None` leaves the URL alone
    pub results: Option<u32>,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results: Some(DEFAULT_RESULTS),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SourceConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Set the requested batch size, clamped to `1..=MAX_RESULTS`
    #[must_use]
    pub fn with_results(mut self, results: Option<u32>) -> Self {
        self.results = results.map(|n| n.clamp(1, MAX_RESULTS));
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Build the request URL: parse `endpoint` and set `results=<n>`, replacing
/// any `results` pair already present and keeping every other pair.
pub fn build_url(endpoint: &str, results: Option<u32>) -> Result<Url, FetchError> {
    let mut url = Url::parse(endpoint).map_err(|e| FetchError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        detail: e.to_string(),
    })?;

    if let Some(n) = results {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| k != "results")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("results", &n.to_string());
    }

    Ok(url)
}

/// Parse a `{ "results": [...] }` body
pub fn parse_users(body: &str) -> Result<Vec<UserRecord>, FetchError> {
    serde_json::from_str::<UsersResponse>(body)
        .map(|response| response.results)
        .map_err(|e| {
            log::error!("[users] JSON parse failed: {e}");
            log::error!("[users] Raw response: {}", truncate_for_log(body));
            FetchError::Parse(e.to_string())
        })
}

/// Fetch users from `endpoint` with a one-off client.
///
/// The endpoint is used verbatim; add the count to the URL yourself or go
/// through [`HttpUserSource`].
pub async fn fetch_users(endpoint: &str) -> Result<Vec<UserRecord>, FetchError> {
    let client = build_client(DEFAULT_TIMEOUT)?;
    let url = build_url(endpoint, None)?;
    execute(&client, url).await
}

/// reqwest-backed [`UserSource`]
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: Client,
    config: SourceConfig,
}

impl HttpUserSource {
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let client = build_client(config.timeout)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        let url = build_url(&self.config.endpoint, self.config.results)?;
        execute(&self.client, url).await
    }
}

fn build_client(timeout: Duration) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FetchError::Network(format!("Failed to build HTTP client: {e}")))
}

/// Send the GET and turn the response into records
async fn execute(client: &Client, url: Url) -> Result<Vec<UserRecord>, FetchError> {
    log::debug!("[users] GET {url}");

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    })?;

    let status = response.status();
    log::debug!("[users] Response Status: {}", status.as_u16());

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to read response body: {e}")))?;

    if !status.is_success() {
        log::warn!("[users] Server answered HTTP {}", status.as_u16());
        return Err(FetchError::Status {
            status: status.as_u16(),
            body: truncate_for_log(&body),
        });
    }

    log::debug!("[users] Response Body: {}", truncate_for_log(&body));

    parse_users(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_appends_results() {
        let url = build_url(DEFAULT_ENDPOINT, Some(100)).unwrap();
        assert_eq!(url.as_str(), "https://randomuser.me/api/?results=100");
    }

    #[test]
    fn build_url_replaces_existing_results_and_keeps_other_pairs() {
        let url = build_url("https://randomuser.me/api/?nat=es&results=5", Some(20)).unwrap();
        assert_eq!(url.query(), Some("nat=es&results=20"));
    }

    #[test]
    fn build_url_without_count_keeps_endpoint() {
        let url = build_url("https://randomuser.me/api/?results=100", None).unwrap();
        assert_eq!(url.query(), Some("results=100"));
    }

    #[test]
    fn build_url_rejects_relative_endpoint() {
        let err = build_url("/api/users", Some(1)).unwrap_err();
        assert!(matches!(err, FetchError::InvalidEndpoint { .. }));
    }

    #[test]
    fn results_are_clamped() {
        let config = SourceConfig::default().with_results(Some(0));
        assert_eq!(config.results, Some(1));
        let config = SourceConfig::default().with_results(Some(90_000));
        assert_eq!(config.results, Some(MAX_RESULTS));
        let config = SourceConfig::default().with_results(None);
        assert_eq!(config.results, None);
    }

    #[test]
    fn parse_users_reads_results_array() {
        let body = r#"{
            "results": [
                { "name": { "first": "Ann", "last": "Lee" }, "location": { "country": "Spain" }, "picture": { "thumbnail": "a.jpg" } },
                { "name": { "first": "Bo", "last": "Kim" }, "location": { "country": "France" }, "picture": { "thumbnail": "b.jpg" } }
            ],
            "info": { "seed": "abc", "results": 2, "page": 1, "version": "1.4" }
        }"#;
        let users = parse_users(body).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].location.country, "Spain");
        assert_eq!(users[1].picture.thumbnail, "b.jpg");
    }

    #[test]
    fn parse_users_rejects_missing_results() {
        assert!(matches!(parse_users(r#"{"error":"Uh oh"}"#), Err(FetchError::Parse(_))));
        assert!(matches!(parse_users("<html>"), Err(FetchError::Parse(_))));
    }
}
