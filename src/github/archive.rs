// src/github/archive.rs
// =============================================================================
// Builds the direct download link for a branch's zip archive.
//
// GitHub serves a zip snapshot of any branch at
//   https://github.com/{owner}/{repo}/archive/refs/heads/{branch}.zip
//
// Values are interpolated as-is. Owner, repo and branch come straight from
// the API response or the user's own URL, which GitHub already constrains.
// =============================================================================

const GITHUB_WEB: &str = "https://github.com";

pub fn archive_url(owner: &str, repo: &str, branch: &str) -> String {
    format!(
        "{}/{}/{}/archive/refs/heads/{}.zip",
        GITHUB_WEB, owner, repo, branch
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_url() {
        assert_eq!(
            archive_url("octocat", "Hello-World", "master"),
            "https://github.com/octocat/Hello-World/archive/refs/heads/master.zip"
        );
    }

    #[test]
    fn test_archive_url_keeps_branch_verbatim() {
        assert_eq!(
            archive_url("o", "r", "release/v1"),
            "https://github.com/o/r/archive/refs/heads/release/v1.zip"
        );
    }
}
