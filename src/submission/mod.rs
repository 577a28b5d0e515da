// src/submission/mod.rs
// =============================================================================
// This module turns a URL the user typed into what ends up on screen.
//
// Submodules:
// - lookup: parse -> fetch -> format pipeline (also used for batch lookups)
// - surface: the two display surfaces (size label, download link)
// - controller: runs one submission at a time against a surface, dropping
//   results from submissions that were overtaken by newer ones
// =============================================================================

mod controller;
mod lookup;
mod surface;

pub use controller::{Controller, Outcome, Phase, Ticket, EMPTY_INPUT_ALERT, LOADING_LABEL};
pub use lookup::{lookup_all, lookup_repo, resolve_repo, LookupEntry, RepoReport};
pub use surface::{DisplayState, Surface, TerminalSurface};
