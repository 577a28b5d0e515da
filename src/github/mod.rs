// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub-specific.
//
// Currently implements:
// - Parsing GitHub URLs to extract owner/repo (parse.rs)
// - Fetching repository metadata from the REST API (api.rs)
// - Building the default-branch zip download link (archive.rs)
// =============================================================================

mod api;
mod archive;
mod parse;

// Re-export the public API so callers can write `github::parse_repo_url`
pub use api::{GithubClient, RepoMetadata};
pub use archive::archive_url;
pub use parse::{parse_repo_url, RepoRef};
