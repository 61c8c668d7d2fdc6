//! Core building blocks for relkit
//!
//! - **config**: release.toml parsing with CLI overrides
//! - **error**: error types with contextual help messages
//! - **vcs**: git operations abstraction (SystemGit)

pub mod config;
pub mod error;
pub mod vcs;
