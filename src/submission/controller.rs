// src/submission/controller.rs
// =============================================================================
// The submission controller: one "form submit" from start to finish.
//
// Lifecycle of a submission:
//   Validating -> Loading -> Parsing -> Fetching -> Formatting
//              -> BuildingLink -> Done
// with any failure jumping straight to Error.
//
// Submissions may overlap (the `form` command spawns each one as its own
// task). Every submission takes a sequence number when it starts, and a
// write to the display only lands if no newer submission has started since.
// That way a slow, older request can never overwrite a newer result, and
// the size label and link always describe the same repository.
// =============================================================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::lookup::{resolve_repo, RepoReport};
use super::surface::Surface;
use crate::error::LookupError;
use crate::github::GithubClient;

pub const EMPTY_INPUT_ALERT: &str = "Please enter a GitHub repository URL";
pub const LOADING_LABEL: &str = "Size: Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Validating,
    Loading,
    Parsing,
    Fetching,
    Formatting,
    BuildingLink,
    Done,
    Error,
}

/// How a submission ended.
#[derive(Debug)]
pub enum Outcome {
    /// Empty input; the user was alerted and nothing else happened
    Rejected,
    /// Size label and download link were updated
    Done(RepoReport),
    /// The error was written to the size label
    Failed(LookupError),
    /// A newer submission started first; our results were thrown away
    Superseded,
}

/// Sequence number handed to a submission when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Drives submissions and owns the display surface.
///
/// Cheap to clone; clones share the surface and the sequence counter.
pub struct Controller<S> {
    client: GithubClient,
    surface: Arc<Mutex<S>>,
    latest: Arc<AtomicU64>,
}

impl<S> Clone for Controller<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            surface: Arc::clone(&self.surface),
            latest: Arc::clone(&self.latest),
        }
    }
}

impl<S: Surface> Controller<S> {
    pub fn new(client: GithubClient, surface: S) -> Self {
        Self {
            client,
            surface: Arc::new(Mutex::new(surface)),
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Runs `f` with the surface locked, e.g. to read its state.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let surface = self.lock_surface();
        f(&*surface)
    }

    /// Starts a new submission, superseding every earlier one.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    // Applies a display update if `ticket` is still the newest submission
    //
    // The check happens under the surface lock, so a newer submission's
    // writes can't interleave with ours. Returns false if discarded.
    pub fn commit(&self, ticket: Ticket, update: impl FnOnce(&mut S)) -> bool {
        let mut surface = self.lock_surface();
        if !self.is_current(ticket) {
            tracing::debug!(seq = ticket.0, "discarding write from superseded submission");
            return false;
        }
        update(&mut surface);
        true
    }

    pub async fn submit(&self, input: &str) -> Outcome {
        enter(None, Phase::Validating);
        let url = input.trim();
        if url.is_empty() {
            self.lock_surface().alert(EMPTY_INPUT_ALERT);
            return Outcome::Rejected;
        }

        let ticket = self.begin();
        enter(Some(ticket), Phase::Loading);
        self.commit(ticket, |s| s.set_size_label(LOADING_LABEL));

        let result = self.run(ticket, url).await;

        match result {
            Ok(Some(report)) => {
                let written = self.commit(ticket, |s| {
                    s.set_size_label(&format!("Size: {}", report.size));
                    s.set_download_link(&report.download_url);
                });
                if written {
                    enter(Some(ticket), Phase::Done);
                    Outcome::Done(report)
                } else {
                    Outcome::Superseded
                }
            }
            Ok(None) => Outcome::Superseded,
            Err(err) => {
                enter(Some(ticket), Phase::Error);
                tracing::warn!(input = %url, error = %err, "submission failed");

                // The download link keeps whatever it showed before
                let label = format!("Size: Error - {}", err.user_message());
                if self.commit(ticket, |s| s.set_size_label(&label)) {
                    Outcome::Failed(err)
                } else {
                    Outcome::Superseded
                }
            }
        }
    }

    // Parse, fetch and format. Ok(None) means we noticed we were superseded
    // before spending a network round trip.
    async fn run(&self, ticket: Ticket, url: &str) -> Result<Option<RepoReport>, LookupError> {
        enter(Some(ticket), Phase::Parsing);
        let repo_ref = resolve_repo(url)?;

        if !self.is_current(ticket) {
            return Ok(None);
        }

        enter(Some(ticket), Phase::Fetching);
        let metadata = self.client.fetch_metadata(&repo_ref).await?;

        enter(Some(ticket), Phase::Formatting);
        enter(Some(ticket), Phase::BuildingLink);
        Ok(Some(RepoReport::new(repo_ref, metadata)))
    }

    fn lock_surface(&self) -> MutexGuard<'_, S> {
        // A panic inside a surface method can't leave DisplayState half
        // written, so a poisoned lock is still usable
        self.surface
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn enter(ticket: Option<Ticket>, phase: Phase) {
    match ticket {
        Some(Ticket(seq)) => tracing::debug!(seq, ?phase, "submission phase"),
        None => tracing::debug!(?phase, "submission phase"),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Arc<Mutex<S>>?
//    - Several submission tasks share one display
//    - Arc lets them all own a handle to it
//    - Mutex makes sure only one of them writes at a time
//
// 2. Why std::sync::Mutex and not tokio::sync::Mutex?
//    - We never hold the lock across an .await
//    - For short critical sections the std mutex is simpler and faster
//
// 3. What is AtomicU64::fetch_add?
//    - Adds to the number and returns the old value in one step
//    - Two tasks calling it at once still get different numbers
// -----------------------------------------------------------------------------
