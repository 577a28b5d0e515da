// src/submission/lookup.rs
// =============================================================================
// The lookup pipeline: URL string in, size + download link out.
//
// Steps:
// 1. Parse owner/repo out of the URL (rejecting URLs without both)
// 2. Fetch the repository metadata once
// 3. Format the size and build the archive link
//
// `lookup_all` runs many of these concurrently for the `lookup` command.
// =============================================================================

use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::error::LookupError;
use crate::github::{self, GithubClient, RepoMetadata, RepoRef};
use crate::size::format_size;

/// Everything we know about a repository after a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoReport {
    pub owner: String,
    pub repo: String,
    pub size_kb: u64,
    /// Human readable size, e.g. "2.00 MB"
    pub size: String,
    pub default_branch: String,
    pub download_url: String,
}

impl RepoReport {
    pub fn new(repo_ref: RepoRef, metadata: RepoMetadata) -> Self {
        let download_url =
            github::archive_url(&repo_ref.owner, &repo_ref.repo, &metadata.default_branch);

        Self {
            size: format_size(metadata.size),
            size_kb: metadata.size,
            default_branch: metadata.default_branch,
            download_url,
            owner: repo_ref.owner,
            repo: repo_ref.repo,
        }
    }
}

/// Result of looking up one input in a batch.
#[derive(Debug, Clone, Serialize)]
pub struct LookupEntry {
    /// The URL exactly as the user typed it
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RepoReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupEntry {
    pub fn is_ok(&self) -> bool {
        self.report.is_some()
    }
}

// Parses a URL and insists on both owner and repo being present
//
// A URL like https://github.com/rust-lang parses fine but has no repo;
// sending "/repos/rust-lang/" to the API would just 404, so we call it an
// invalid URL instead.
pub fn resolve_repo(input: &str) -> Result<RepoRef, LookupError> {
    let repo_ref = github::parse_repo_url(input)?;

    if !repo_ref.is_complete() {
        return Err(LookupError::InvalidUrl(None));
    }

    Ok(repo_ref)
}

pub async fn lookup_repo(client: &GithubClient, input: &str) -> Result<RepoReport, LookupError> {
    let repo_ref = resolve_repo(input.trim())?;
    let metadata = client.fetch_metadata(&repo_ref).await?;
    Ok(RepoReport::new(repo_ref, metadata))
}

// Looks up many URLs concurrently
//
// At most `concurrency` requests are in flight at once. Results come back
// in the same order as `inputs`.
pub async fn lookup_all(
    client: &GithubClient,
    inputs: Vec<String>,
    concurrency: usize,
) -> Vec<LookupEntry> {
    let futures = inputs.into_iter().map(|input| async move {
        match lookup_repo(client, &input).await {
            Ok(report) => LookupEntry {
                input,
                report: Some(report),
                error: None,
            },
            Err(e) => {
                tracing::warn!(%input, error = %e, "lookup failed");
                LookupEntry {
                    input,
                    report: None,
                    error: Some(e.user_message()),
                }
            }
        }
    });

    stream::iter(futures)
        .buffered(concurrency.max(1))
        .collect()
        .await
}
