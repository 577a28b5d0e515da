// src/lib.rs
// =============================================================================
// Library half of repo-sizer. The binary in main.rs is a thin shell around
// these modules.
// =============================================================================

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod size;
pub mod submission;
