//! Version accessor for packaging manifests
//!
//! The manifest carries its version as a quoted assignment, e.g.
//! `PYFUSE3_VERSION = '3.4.1'`. Reads extract the quoted value; writes replace
//! only the quoted literal, leaving every other byte of the file untouched.
//! If the file contains more than one matching assignment, the first wins.

use crate::core::error::{ManifestError, RelError, RelResult};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Accessor for a version literal inside a packaging manifest
pub struct VersionField {
  path: PathBuf,
  pattern: Regex,
  key: String,
}

impl VersionField {
  /// Build an accessor for `key = '<version>'` in the given manifest
  pub fn new(path: &Path, key: &str) -> RelResult<Self> {
    let pattern = Regex::new(&format!(r#"{}\s*=\s*['"]([^'"]+)['"]"#, regex::escape(key)))
      .map_err(|e| RelError::message(format!("Invalid version pattern for key '{}': {}", key, e)))?;

    Ok(Self {
      path: path.to_path_buf(),
      pattern,
      key: key.to_string(),
    })
  }

  /// Manifest path this accessor reads and writes
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Extract the current version from the manifest
  pub fn read(&self) -> RelResult<String> {
    let content = self.read_content()?;
    let captures = self.pattern.captures(&content).ok_or_else(|| {
      RelError::Manifest(ManifestError::VersionNotFound {
        path: self.path.clone(),
        key: self.key.clone(),
      })
    })?;

    Ok(captures[1].to_string())
  }

  /// Substitute a new version into the manifest
  ///
  /// Replaces only the quoted literal of the first match; quote style and all
  /// surrounding content are preserved byte-for-byte. Fails with
  /// VersionNotFound before touching the file if the pattern is absent.
  pub fn write(&self, new_version: &str) -> RelResult<()> {
    let content = self.read_content()?;
    let group = self
      .pattern
      .captures(&content)
      .and_then(|c| c.get(1))
      .ok_or_else(|| {
        RelError::Manifest(ManifestError::VersionNotFound {
          path: self.path.clone(),
          key: self.key.clone(),
        })
      })?;

    let mut updated = String::with_capacity(content.len() + new_version.len());
    updated.push_str(&content[..group.start()]);
    updated.push_str(new_version);
    updated.push_str(&content[group.end()..]);

    fs::write(&self.path, updated)?;
    Ok(())
  }

  fn read_content(&self) -> RelResult<String> {
    fs::read_to_string(&self.path).map_err(|e| {
      RelError::Manifest(ManifestError::ReadFailed {
        path: self.path.clone(),
        source: e,
      })
    })
  }
}
