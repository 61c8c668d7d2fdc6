//! Integration tests for the relkit release flow

use crate::helpers::{TestRepo, run_relkit, run_relkit_raw};
use anyhow::Result;

#[test]
fn test_dry_run_makes_no_changes() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_relkit(&repo.path, &["9.9.9", "--dry-run"], None)?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Current version: 1.2.3"), "got: {}", stdout);
  assert!(stdout.contains("9.9.9"), "got: {}", stdout);
  assert!(stdout.contains("Dry-run"), "got: {}", stdout);

  // Manifest untouched, no commit, no tag
  assert!(repo.read_file("setup.py")?.contains("PYFUSE3_VERSION = '1.2.3'"));
  assert_eq!(repo.commit_count()?, 1);
  assert!(!repo.tag_exists("v9.9.9")?);

  Ok(())
}

#[test]
fn test_dry_run_json_output() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_relkit(&repo.path, &["2.0.0", "--dry-run", "--json"], None)?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  let json: serde_json::Value = serde_json::from_str(&stdout).expect("Should be valid JSON");
  assert_eq!(json["current_version"], "1.2.3");
  assert_eq!(json["new_version"], "2.0.0");
  assert_eq!(json["tag"], "v2.0.0");

  assert!(repo.read_file("setup.py")?.contains("1.2.3"));

  Ok(())
}

#[test]
fn test_declined_prompt_leaves_everything_untouched() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_relkit(&repo.path, &["9.9.9"], Some("n\n"))?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  // Declining is a clean exit, not an error
  assert!(output.status.success());
  assert!(stdout.contains("Aborted"), "got: {}", stdout);

  assert!(repo.read_file("setup.py")?.contains("PYFUSE3_VERSION = '1.2.3'"));
  assert_eq!(repo.commit_count()?, 1);
  assert!(!repo.tag_exists("v9.9.9")?);

  Ok(())
}

#[test]
fn test_eof_on_prompt_counts_as_decline() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_relkit(&repo.path, &["9.9.9"], None)?;

  assert!(output.status.success());
  assert!(repo.read_file("setup.py")?.contains("1.2.3"));
  assert_eq!(repo.commit_count()?, 1);

  Ok(())
}

#[test]
fn test_confirmed_release_updates_commits_and_tags() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_relkit(&repo.path, &["9.9.9"], Some("y\n"))?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  // Manifest rewritten in place, only the literal changed
  let setup_py = repo.read_file("setup.py")?;
  assert!(setup_py.contains("PYFUSE3_VERSION = '9.9.9'"), "got: {}", setup_py);
  assert!(setup_py.contains("setup(name=\"pyfuse3\", version=PYFUSE3_VERSION)"));

  // Bump commit and annotated tag created
  assert_eq!(repo.commit_count()?, 2);
  assert_eq!(repo.head_subject()?, "Bump version to 9.9.9");
  assert!(repo.tag_exists("v9.9.9")?);
  assert_eq!(repo.tag_message("v9.9.9")?, "Release 9.9.9");

  // Pushing is left to the user
  assert!(stdout.contains("git push origin"), "got: {}", stdout);

  Ok(())
}

#[test]
fn test_no_tag_updates_manifest_only() -> Result<()> {
  let repo = TestRepo::new()?;

  run_relkit(&repo.path, &["9.9.9", "--no-tag", "--yes"], None)?;

  assert!(repo.read_file("setup.py")?.contains("PYFUSE3_VERSION = '9.9.9'"));
  assert_eq!(repo.commit_count()?, 1);
  assert!(!repo.tag_exists("v9.9.9")?);

  Ok(())
}

#[test]
fn test_missing_pattern_fails_before_write() -> Result<()> {
  let repo = TestRepo::new()?;
  let before = repo.read_file("setup.py")?;

  let output = run_relkit_raw(&repo.path, &["9.9.9", "--key", "NO_SUCH_KEY", "--yes"], None)?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains("NO_SUCH_KEY"), "got: {}", stderr);

  // Nothing was written
  assert_eq!(repo.read_file("setup.py")?, before);
  assert_eq!(repo.commit_count()?, 1);

  Ok(())
}

#[test]
fn test_invalid_version_is_rejected() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_relkit_raw(&repo.path, &["not-a-version", "--yes"], None)?;

  assert_eq!(output.status.code(), Some(1));
  assert!(repo.read_file("setup.py")?.contains("1.2.3"));

  Ok(())
}

#[test]
fn test_tag_collision_is_fatal_system_error() -> Result<()> {
  let repo = TestRepo::new()?;
  crate::helpers::git(&repo.path, &["tag", "-a", "v9.9.9", "-m", "existing"])?;

  let output = run_relkit_raw(&repo.path, &["9.9.9", "--yes"], None)?;

  // Git failure exits 2; the manifest write is not rolled back
  assert_eq!(output.status.code(), Some(2));
  assert!(repo.read_file("setup.py")?.contains("PYFUSE3_VERSION = '9.9.9'"));

  Ok(())
}

#[test]
fn test_manifest_override_flag() -> Result<()> {
  let repo = TestRepo::new()?;
  std::fs::write(repo.path.join("version.py"), "PYFUSE3_VERSION = '0.5.0'\n")?;
  crate::helpers::git(&repo.path, &["add", "version.py"])?;
  crate::helpers::git(&repo.path, &["commit", "-m", "Add version.py"])?;

  let output = run_relkit(
    &repo.path,
    &["0.6.0", "--manifest", "version.py", "--dry-run"],
    None,
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Current version: 0.5.0"), "got: {}", stdout);
  assert!(repo.read_file("version.py")?.contains("0.5.0"));

  Ok(())
}
