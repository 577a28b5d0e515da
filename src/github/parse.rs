// src/github/parse.rs
// =============================================================================
// This module extracts the owner and repository name from a GitHub URL.
//
// Strategy:
// - Parse the input with the `url` crate (same rules a browser uses)
// - Split the path by '/'
// - The first segment is the owner, the second is the repo
//
// Anything after the repo (e.g. /tree/main/src) is ignored, so users can
// paste whatever page of the repository they happen to be looking at.
// =============================================================================

use url::Url;

use crate::error::LookupError;

/// Owner + repository name, as found in a URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    /// True when both owner and repo are non-empty.
    ///
    /// `parse_repo_url` happily returns empty parts for short paths like
    /// `https://github.com/rust-lang`; callers decide what to do with those.
    pub fn is_complete(&self) -> bool {
        !self.owner.is_empty() && !self.repo.is_empty()
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

// Parses a GitHub URL into a RepoRef
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - https://github.com/owner/repo/tree/main/anything
//
// Returns LookupError::InvalidUrl only when the input isn't a URL at all.
// Missing path segments come back as empty strings.
//
// Example:
//   "https://github.com/rust-lang/rust" -> RepoRef { owner: "rust-lang", repo: "rust" }
pub fn parse_repo_url(input: &str) -> Result<RepoRef, LookupError> {
    let url = Url::parse(input).map_err(|e| LookupError::InvalidUrl(Some(e)))?;

    // path() always starts with '/', so segment 0 is the empty string
    let mut parts = url.path().split('/').skip(1);
    let owner = parts.next().unwrap_or_default().to_string();
    let repo = parts.next().unwrap_or_default();

    // Remove .git suffix if present (people paste clone URLs too)
    let repo = repo.strip_suffix(".git").unwrap_or(repo).to_string();

    Ok(RepoRef { owner, repo })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Url::parse instead of splitting the string ourselves?
//    - URLs have many edge cases (ports, userinfo, percent-encoding, ...)
//    - The url crate follows the same WHATWG rules browsers use
//    - "not a url" fails to parse, which is exactly when we report InvalidUrl
//
// 2. What does unwrap_or_default() do on Option<&str>?
//    - Some(s) gives back s
//    - None gives back the type's Default value, which for &str is ""
//    - No panic, unlike unwrap()
// -----------------------------------------------------------------------------
