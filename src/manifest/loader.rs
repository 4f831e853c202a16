use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ManifestError;
use crate::models::Manifest;

/// Manifest together with the file it was read from.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    /// Location the manifest was parsed from.
    pub path: PathBuf,
    /// Parsed manifest entries.
    pub manifest: Manifest,
}

/// Load a manifest from disk.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the first candidate that exists and parses, probing in order.
///
/// Candidates that are missing are skipped quietly; candidates that exist but cannot be
/// parsed are logged and skipped so a stale file never hides a valid one further down.
pub fn discover_manifest(candidates: &[PathBuf]) -> Result<LoadedManifest, ManifestError> {
    for candidate in candidates {
        if !candidate.is_file() {
            log::debug!("no manifest at {}", candidate.display());
            continue;
        }

        match load_manifest(candidate) {
            Ok(manifest) => {
                log::debug!(
                    "loaded {} manifest entries from {}",
                    manifest.len(),
                    candidate.display()
                );
                return Ok(LoadedManifest {
                    path: candidate.clone(),
                    manifest,
                });
            }
            Err(err) => log::warn!("skipping manifest candidate: {err}"),
        }
    }

    Err(ManifestError::NotFound {
        candidates: candidates.to_vec(),
    })
}
