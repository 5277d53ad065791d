use std::path::Path;
use thiserror::Error;

use crate::manifest::Manifest;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Manifest must be a JSON object keyed by cell")]
    NotAnObject,
}

/// Reads and parses the manifest at `path`.
///
/// Callers log the error and leave the grid empty; there is no retry.
pub async fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest, ManifestError> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path).await?;
    let manifest = Manifest::from_json_str(&json)?;

    tracing::debug!(
        path = %path.display(),
        entries = manifest.len(),
        "Loaded image manifest"
    );

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_manifest(dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(ManifestError::Io(_))));
    }
}
