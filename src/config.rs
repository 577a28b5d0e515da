// src/config.rs
// =============================================================================
// Runtime settings, resolved once from command-line flags / environment.
//
// There is no config file: the only knobs are where the API lives, how long
// to wait for it, and which User-Agent to send. clap already merged flags
// and env vars (GITHUB_API_URL) by the time we get here.
// =============================================================================

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub rejects API requests that carry no User-Agent.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Settings {
    /// Base of the REST API, always ending in '/'.
    pub api_base: Url,
    /// Per-request timeout. None means wait forever.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Settings {
    pub fn new(api_url: &str, timeout_secs: Option<u64>) -> Result<Self> {
        Ok(Self {
            api_base: normalize_api_base(api_url)?,
            timeout: timeout_secs.map(Duration::from_secs),
            user_agent: USER_AGENT.to_string(),
        })
    }
}

// Parses the API base and makes sure its path ends with '/'
//
// Url::join replaces the last path segment unless the base ends in a slash,
// so "https://ghe.example.com/api/v3" would otherwise lose its "v3".
fn normalize_api_base(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).with_context(|| format!("Invalid API URL '{}'", raw))?;

    if url.cannot_be_a_base() {
        anyhow::bail!("API URL '{}' cannot be used as a base URL", raw);
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_base() {
        let settings = Settings::new(DEFAULT_API_URL, None).unwrap();
        assert_eq!(settings.api_base.as_str(), "https://api.github.com/");
        assert!(settings.timeout.is_none());
    }

    #[test]
    fn test_api_base_keeps_path_prefix() {
        let settings = Settings::new("https://ghe.example.com/api/v3", Some(5)).unwrap();
        assert_eq!(settings.api_base.as_str(), "https://ghe.example.com/api/v3/");
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_api_url_is_rejected() {
        assert!(Settings::new("not a url", None).is_err());
        assert!(Settings::new("mailto:someone@example.com", None).is_err());
    }

    #[test]
    fn test_user_agent_names_the_tool() {
        let settings = Settings::new(DEFAULT_API_URL, None).unwrap();
        assert!(settings.user_agent.starts_with("repo-sizer/"));
    }
}
