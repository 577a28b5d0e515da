// src/error.rs
// =============================================================================
// Error types for a single repository lookup.
//
// Every failure a lookup can hit ends up as one of these variants. The
// Display text of each variant is exactly what the user sees after
// "Size: Error - ", so keep the messages short and human.
//
// Rust concepts:
// - thiserror: derive macro that writes the std::error::Error impl for us
// - #[from]: lets the ? operator convert library errors automatically
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between "user typed a URL" and "we know the
/// size and default branch".
#[derive(Debug, Error)]
pub enum LookupError {
    /// The input is not a URL at all, or it has no owner/repo in its path.
    #[error("Invalid GitHub URL")]
    InvalidUrl(#[source] Option<url::ParseError>),

    /// The API answered with a non-2xx status.
    #[error("Repository not found")]
    NotFound { status: StatusCode },

    /// Network-level failure (DNS, connection refused, timeout, ...).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 2xx but the body wasn't the JSON we expected.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    /// The message shown on the size label.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
