//! System git backend - zero dependencies
//!
//! Uses git porcelain commands for staging, committing, and tagging. Optimized for:
//! - Safe subprocess execution (isolated environment)
//! - One metadata call on open (rev-parse --show-toplevel)
//!
//! Any command failure is fatal to the release flow: there is no retry and no
//! partial rollback.

use crate::core::error::{GitError, RelError, RelResult, ResultExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using system git (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,

  /// Working tree root
  work_tree: PathBuf,
}

impl SystemGit {
  /// Open a git repository
  ///
  /// This performs ONE subprocess call to get the repository metadata.
  pub fn open(path: &Path) -> RelResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if stderr.contains("not a git repository") {
        return Err(RelError::Git(GitError::RepoNotFound {
          path: path.to_path_buf(),
        }));
      }
      return Err(RelError::message(format!("Failed to open git repository: {}", stderr)));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let work_tree = stdout.trim();

    Ok(Self {
      repo_path: path.to_path_buf(),
      work_tree: PathBuf::from(work_tree),
    })
  }

  /// Working tree root resolved at open
  #[allow(dead_code)] // Kept as convenience API for callers outside the release flow
  pub fn work_tree(&self) -> &Path {
    &self.work_tree
  }

  /// Get current branch name
  pub fn current_branch(&self) -> RelResult<String> {
    let output = self
      .git_cmd()
      .args(["rev-parse", "--abbrev-ref", "HEAD"])
      .output()
      .context("Failed to get current branch")?;

    if !output.status.success() {
      return Ok("HEAD".to_string()); // Detached HEAD
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Stage a single file
  pub fn stage(&self, path: &Path) -> RelResult<()> {
    self.run(&["add"], &[path])
  }

  /// Commit staged changes with the given message
  pub fn commit(&self, message: &str) -> RelResult<()> {
    self.run(&["commit", "-m", message], &[])
  }

  /// Create an annotated tag with a message
  pub fn tag_annotated(&self, name: &str, message: &str) -> RelResult<()> {
    self.run(&["tag", "-a", name, "-m", message], &[])
  }

  /// Run a git command, mapping failure to GitError::CommandFailed
  fn run(&self, args: &[&str], paths: &[&Path]) -> RelResult<()> {
    let mut cmd = self.git_cmd();
    cmd.args(args);
    for path in paths {
      cmd.arg(path);
    }

    let output = cmd
      .output()
      .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(RelError::Git(GitError::CommandFailed {
        command: format!("git {}", args.join(" ")),
        stderr: stderr.to_string(),
      }));
    }

    Ok(())
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Adds safe configuration overrides
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    // Set working directory
    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    // Force safe behavior (override user config)
    cmd.arg("-c").arg("protocol.version=2");
    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII

    cmd
  }
}
