//! Release command implementation
//!
//! A deliberately linear flow: read the current version, show the plan, gate on
//! confirmation, rewrite the manifest, then commit and tag. Pushing is left to
//! the user; the command prints the exact commands instead.

use crate::core::config::ReleaseConfig;
use crate::core::error::{RelError, RelResult};
use crate::core::vcs::SystemGit;
use crate::manifest::VersionField;
use crate::ui;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Options collected from the CLI
pub struct ReleaseOptions {
  /// New version to release
  pub version: String,
  /// Show intended changes without making any
  pub dry_run: bool,
  /// Skip the commit-and-tag step
  pub no_tag: bool,
  /// Skip the confirmation prompt
  pub yes: bool,
  /// Emit the dry-run plan as JSON
  pub json: bool,
  /// Override the configured manifest path
  pub manifest: Option<PathBuf>,
  /// Override the configured version key
  pub key: Option<String>,
}

/// Dry-run plan, emitted with --json for CI/automation
#[derive(Serialize)]
struct DryRunPlan<'a> {
  manifest: &'a std::path::Path,
  current_version: &'a str,
  new_version: &'a str,
  /// None when --no-tag is set
  tag: Option<&'a str>,
}

/// Run the release flow
pub fn run_release(opts: ReleaseOptions) -> RelResult<()> {
  let cwd = env::current_dir()?;
  let config = ReleaseConfig::load(&cwd)?;

  let manifest_path = opts.manifest.unwrap_or(config.manifest);
  let key = opts.key.unwrap_or(config.key);

  semver::Version::parse(&opts.version).map_err(|e| {
    RelError::with_help(
      format!("Invalid version '{}': {}", opts.version, e),
      "Use a semantic version like 3.4.1.",
    )
  })?;

  let field = VersionField::new(&manifest_path, &key)?;
  let current = field.read()?;

  let tag = format!("{}{}", config.tag_prefix, opts.version);

  if opts.dry_run {
    let plan = DryRunPlan {
      manifest: &manifest_path,
      current_version: &current,
      new_version: &opts.version,
      tag: (!opts.no_tag).then_some(tag.as_str()),
    };

    if opts.json {
      println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
      print_versions(&current, &opts.version);
      println!();
      println!("🔍 Dry-run mode (no changes applied)");
      println!("   Would update {} to {}", manifest_path.display(), opts.version);
      if !opts.no_tag {
        println!("   Would commit and create tag {}", tag);
      }
    }
    return Ok(());
  }

  print_versions(&current, &opts.version);

  if !opts.yes && !ui::confirm("Continue?")? {
    println!("Aborted");
    return Ok(());
  }

  field.write(&opts.version)?;
  println!("✅ Updated version to {} in {}", opts.version, manifest_path.display());

  if opts.no_tag {
    return Ok(());
  }

  let git = SystemGit::open(&cwd)?;
  git.stage(&manifest_path)?;
  git.commit(&format!("Bump version to {}", opts.version))?;
  git.tag_annotated(&tag, &format!("Release {}", opts.version))?;
  println!("✅ Created tag {}", tag);

  let branch = match git.current_branch()?.as_str() {
    "HEAD" => "main".to_string(), // detached, assume the default branch
    branch => branch.to_string(),
  };

  println!();
  println!("Next steps:");
  println!("  git push origin {} && git push origin {}", branch, tag);

  Ok(())
}

fn print_versions(current: &str, new: &str) {
  println!("Current version: {}", current);
  println!("New version:     {}", new);
}
