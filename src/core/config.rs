use crate::core::error::{ConfigError, RelError, RelResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for relkit
/// Loaded from release.toml at the repository root; all fields optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
  /// Packaging manifest that carries the version literal (default: setup.py)
  #[serde(default = "default_manifest")]
  pub manifest: PathBuf,

  /// Name of the version assignment in the manifest (default: VERSION)
  #[serde(default = "default_key")]
  pub key: String,

  /// Prefix for release tags (default: "v", producing tags like v1.2.3)
  #[serde(default = "default_tag_prefix")]
  pub tag_prefix: String,
}

fn default_manifest() -> PathBuf {
  PathBuf::from("setup.py")
}

fn default_key() -> String {
  "VERSION".to_string()
}

fn default_tag_prefix() -> String {
  "v".to_string()
}

impl Default for ReleaseConfig {
  fn default() -> Self {
    Self {
      manifest: default_manifest(),
      key: default_key(),
      tag_prefix: default_tag_prefix(),
    }
  }
}

impl ReleaseConfig {
  /// Load release.toml from the given root, falling back to defaults when absent
  pub fn load(root: &Path) -> RelResult<Self> {
    let path = root.join("release.toml");
    if !path.exists() {
      return Ok(Self::default());
    }

    let content = fs::read_to_string(&path)?;
    toml_edit::de::from_str(&content).map_err(|e| {
      RelError::Config(ConfigError::Invalid {
        path,
        reason: e.to_string(),
      })
    })
  }
}
