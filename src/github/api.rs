// src/github/api.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// We only need one endpoint:
//   GET /repos/{owner}/{repo}
// which returns (among many other fields) the repository size in KB and
// the name of the default branch.
//
// No authentication is sent, so anonymous rate limits apply. Any non-2xx
// answer (404, 403 rate limit, 451, ...) is reported as "not found".
// =============================================================================

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::parse::RepoRef;
use crate::config::Settings;
use crate::error::LookupError;

/// The two fields of the repository payload we care about.
///
/// serde ignores every other field in the response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoMetadata {
    /// Repository size in kilobytes
    pub size: u64,
    pub default_branch: String,
}

/// Thin wrapper around a reqwest Client bound to one API base URL.
///
/// Cloning is cheap: reqwest::Client is reference counted internally, so
/// every clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    api_base: Url,
}

impl GithubClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let mut builder = Client::builder()
            .user_agent(settings.user_agent.clone())
            .default_headers(headers);

        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            api_base: settings.api_base.clone(),
        })
    }

    // Fetches size and default branch in a single request
    pub async fn fetch_metadata(&self, repo_ref: &RepoRef) -> Result<RepoMetadata, LookupError> {
        let endpoint = self.repo_endpoint(repo_ref)?;
        tracing::debug!(%endpoint, "requesting repository metadata");

        let response = self.http.get(endpoint).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(%status, repo = %repo_ref, "metadata request failed");
            return Err(LookupError::NotFound { status });
        }

        // Read the body first and decode it ourselves so JSON problems
        // surface as Decode rather than as a generic reqwest error
        let body = response.bytes().await?;
        let metadata: RepoMetadata = serde_json::from_slice(&body)?;

        tracing::debug!(
            repo = %repo_ref,
            size_kb = metadata.size,
            branch = %metadata.default_branch,
            "metadata received"
        );
        Ok(metadata)
    }

    /// Repository size in KB.
    pub async fn fetch_size(&self, repo_ref: &RepoRef) -> Result<u64, LookupError> {
        Ok(self.fetch_metadata(repo_ref).await?.size)
    }

    /// Name of the default branch (usually "main" or "master").
    pub async fn fetch_default_branch(&self, repo_ref: &RepoRef) -> Result<String, LookupError> {
        Ok(self.fetch_metadata(repo_ref).await?.default_branch)
    }

    fn repo_endpoint(&self, repo_ref: &RepoRef) -> Result<Url, LookupError> {
        self.api_base
            .join(&format!("repos/{}/{}", repo_ref.owner, repo_ref.repo))
            .map_err(|e| LookupError::InvalidUrl(Some(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> GithubClient {
        let settings = Settings::new(&server.url(), Some(5)).unwrap();
        GithubClient::new(&settings).unwrap()
    }

    fn hello_world() -> RepoRef {
        RepoRef {
            owner: "octocat".to_string(),
            repo: "Hello-World".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_metadata() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/octocat/Hello-World")
            .match_header("user-agent", Matcher::Regex("^repo-sizer/".to_string()))
            .match_header("accept", "application/vnd.github+json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":1296269,"size":2048,"default_branch":"master","private":false}"#)
            .create_async()
            .await;

        let metadata = client_for(&server).fetch_metadata(&hello_world()).await.unwrap();

        assert_eq!(
            metadata,
            RepoMetadata {
                size: 2048,
                default_branch: "master".to_string(),
            }
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_single_field_fetches() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/octocat/Hello-World")
            .with_status(200)
            .with_body(r#"{"size":12,"default_branch":"main"}"#)
            .expect(2)
            .create_async()
            .await;

        let client = client_for(&server);
        assert_eq!(client.fetch_size(&hello_world()).await.unwrap(), 12);
        assert_eq!(
            client.fetch_default_branch(&hello_world()).await.unwrap(),
            "main"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/nope/nope")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let repo_ref = RepoRef {
            owner: "nope".to_string(),
            repo: "nope".to_string(),
        };
        let err = client_for(&server).fetch_metadata(&repo_ref).await.unwrap_err();

        assert!(matches!(err, LookupError::NotFound { status } if status.as_u16() == 404));
        assert_eq!(err.user_message(), "Repository not found");
    }

    #[tokio::test]
    async fn test_rate_limited_is_reported_as_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/octocat/Hello-World")
            .with_status(403)
            .create_async()
            .await;

        let err = client_for(&server).fetch_metadata(&hello_world()).await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/octocat/Hello-World")
            .with_status(200)
            .with_body(r#"{"size":"big"}"#)
            .create_async()
            .await;

        let err = client_for(&server).fetch_metadata(&hello_world()).await.unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[tokio::test]
    async fn test_api_base_path_prefix_is_kept() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v3/repos/octocat/Hello-World")
            .with_status(200)
            .with_body(r#"{"size":1,"default_branch":"main"}"#)
            .create_async()
            .await;

        let settings = Settings::new(&format!("{}/api/v3", server.url()), None).unwrap();
        let client = GithubClient::new(&settings).unwrap();

        assert_eq!(client.fetch_size(&hello_world()).await.unwrap(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        // Grab a free port, then close it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let settings = Settings::new(&format!("http://127.0.0.1:{}", port), Some(5)).unwrap();
        let client = GithubClient::new(&settings).unwrap();

        let err = client.fetch_metadata(&hello_world()).await.unwrap_err();
        assert!(matches!(err, LookupError::Http(_)));
    }
}
