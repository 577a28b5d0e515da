// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two ways to use the tool:
// - `lookup`: pass one or more URLs, get a table (or JSON) back
// - `form`: an interactive prompt; every line you type is a submission
// =============================================================================

use clap::{ArgAction, Parser, Subcommand};

use crate::config::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(
    name = "repo-sizer",
    version,
    about = "Look up a GitHub repository's size and default-branch download link",
    long_about = "repo-sizer asks the GitHub API how big a repository is and which branch is \
                  its default, then prints a direct link to that branch's zip archive."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the GitHub REST API
    ///
    /// Point this at a GitHub Enterprise instance (https://host/api/v3)
    /// or a local mock server.
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Give up on an API request after this many seconds (default: wait forever)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// More log output on stderr (-v = info, -vv = debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up one or more repositories
    ///
    /// Example: repo-sizer lookup https://github.com/rust-lang/rust
    Lookup {
        /// GitHub repository URLs (e.g., https://github.com/user/repo)
        #[arg(required = true)]
        urls: Vec<String>,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// How many lookups may run at the same time
        #[arg(long, default_value_t = 8)]
        concurrency: usize,
    },

    /// Interactive prompt: paste a URL, press Enter, repeat
    ///
    /// Submitting a new URL while the previous one is still loading is fine;
    /// only the newest submission is shown.
    Form,
}
