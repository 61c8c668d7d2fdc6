//! CLI commands for relkit
//!
//! - **release**: the full bump-and-tag flow behind the binary's single surface

pub mod release;

pub use release::{ReleaseOptions, run_release};
