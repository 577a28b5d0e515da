// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, filtered by RUST_LOG / -v)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = a lookup failed, 2 = error)
// =============================================================================

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use repo_sizer::cli::{Cli, Commands};
use repo_sizer::config::Settings;
use repo_sizer::github::GithubClient;
use repo_sizer::submission::{self, Controller, LookupEntry, Outcome, TerminalSurface};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::new(&cli.api_url, cli.timeout)?;
    tracing::debug!(
        api_base = %settings.api_base,
        timeout = ?settings.timeout,
        "settings resolved"
    );

    let client = GithubClient::new(&settings)?;

    match cli.command {
        Commands::Lookup {
            urls,
            json,
            concurrency,
        } => handle_lookup(&client, urls, json, concurrency).await,
        Commands::Form => handle_form(client).await,
    }
}

// Logs go to stderr so `lookup --json` output stays machine-readable.
// RUST_LOG wins over -v when both are given.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "repo_sizer=warn",
        1 => "repo_sizer=info",
        _ => "repo_sizer=debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// Handles the 'lookup' subcommand
async fn handle_lookup(
    client: &GithubClient,
    urls: Vec<String>,
    json: bool,
    concurrency: usize,
) -> Result<i32> {
    tracing::info!(count = urls.len(), concurrency, "looking up repositories");

    let entries = submission::lookup_all(client, urls, concurrency).await;

    print_results(&entries, json)?;

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    if failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Handles the 'form' subcommand
//
// Every line read from stdin is one submission, spawned as its own task so
// the prompt stays responsive while a lookup is in flight.
async fn handle_form(client: GithubClient) -> Result<i32> {
    println!("📝 Paste a GitHub repository URL and press Enter (Ctrl-D to quit)");

    let controller = Controller::new(client, TerminalSurface::default());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tasks = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        let controller = controller.clone();
        tasks.spawn(async move { controller.submit(&line).await });
    }

    // Input closed; let in-flight submissions finish before exiting
    let mut failed = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Outcome::Failed(_)) => failed += 1,
            Ok(Outcome::Done(report)) => {
                tracing::info!(owner = %report.owner, repo = %report.repo, "submission done")
            }
            Ok(Outcome::Rejected | Outcome::Superseded) => {}
            Err(e) => tracing::error!(error = %e, "submission task panicked"),
        }
    }

    let last = controller.with_surface(|surface| surface.state().clone());
    if !last.size_label.is_empty() {
        println!();
        println!("📊 Last result:");
        println!("   {}", last.size_label);
        if let Some(link) = &last.download_link {
            println!("   {}", link);
        }
    }

    Ok(if failed > 0 { 1 } else { 0 })
}

// Prints the results either as a table or JSON
fn print_results(entries: &[LookupEntry], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(entries)?;
        println!("{}", json_output);
    } else {
        print_table(entries);
    }
    Ok(())
}

// Prints results as a human-readable table in the terminal
fn print_table(entries: &[LookupEntry]) {
    println!("{:<50} {:<12} {:<15} {}", "URL", "SIZE", "BRANCH", "DOWNLOAD");
    println!("{}", "=".repeat(110));

    for entry in entries {
        // Truncate URL if too long for display
        let url_display = if entry.input.chars().count() > 47 {
            format!("{}...", entry.input.chars().take(47).collect::<String>())
        } else {
            entry.input.clone()
        };

        match (&entry.report, &entry.error) {
            (Some(report), _) => println!(
                "{:<50} {:<12} {:<15} {}",
                url_display, report.size, report.default_branch, report.download_url
            ),
            (None, error) => println!(
                "{:<50} ❌ {}",
                url_display,
                error.as_deref().unwrap_or("Unknown error")
            ),
        }
    }

    println!();

    let ok_count = entries.iter().filter(|e| e.is_ok()).count();
    println!("📊 Summary:");
    println!("   ✅ Found: {}", ok_count);
    println!("   ❌ Failed: {}", entries.len() - ok_count);
}
