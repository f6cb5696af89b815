//! Artifact Integrity
//!
//! SHA-256 digest of the artifact bytes checked against a `<file>.sha256`
//! sidecar. A missing sidecar is not an error; a disagreeing one is.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{AppError, AppResult};

/// Hex digest of a byte slice.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact.as_os_str().to_os_string();
    name.push(".sha256");
    PathBuf::from(name)
}

/// Verify the artifact bytes against the sidecar, if one exists.
/// Returns true when a sidecar existed and matched.
pub fn verify_sidecar(artifact: &Path, bytes: &[u8]) -> AppResult<bool> {
    let sidecar = sidecar_path(artifact);
    if !sidecar.exists() {
        log::debug!("No checksum sidecar at {}", sidecar.display());
        return Ok(false);
    }

    let recorded = fs::read_to_string(&sidecar).map_err(|e| {
        AppError::ModelLoadFailure(format!("cannot read {}: {}", sidecar.display(), e))
    })?;
    // `sha256sum` output is "<digest>  <filename>"; the digest alone is fine too
    let recorded = recorded
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    let actual = sha256_hex(bytes);

    if recorded != actual {
        return Err(AppError::ModelLoadFailure(format!(
            "checksum mismatch: sidecar records {}, artifact hashes to {}",
            recorded, actual
        )));
    }

    log::info!("Model checksum verified");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_sha256_hex_empty() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_missing_sidecar_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("model.json");
        fs::write(&artifact, b"{}").unwrap();

        assert_eq!(verify_sidecar(&artifact, b"{}").unwrap(), false);
    }

    #[test]
    fn test_matching_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("model.json");
        let bytes = b"{\"intercept\": 0.0}";
        fs::write(&artifact, bytes).unwrap();
        fs::write(
            dir.path().join("model.json.sha256"),
            format!("{}  model.json\n", sha256_hex(bytes)),
        )
        .unwrap();

        assert_eq!(verify_sidecar(&artifact, bytes).unwrap(), true);
    }

    #[test]
    fn test_mismatching_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("model.json");
        fs::write(&artifact, b"{}").unwrap();
        fs::write(dir.path().join("model.json.sha256"), "deadbeef\n").unwrap();

        let err = verify_sidecar(&artifact, b"{}").unwrap_err();
        assert!(matches!(err, crate::error::AppError::ModelLoadFailure(_)));
    }
}
