//! Content fingerprints for cache entries
//!
//! Hashes are lowercase hex SHA-256 digests. Same inputs = same hash.

use crate::error::{GencacheError, GencacheResult};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Hash raw bytes
pub fn hash_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Hash a single file's contents
pub fn hash_file(path: &Path) -> GencacheResult<String> {
    let contents = fs::read(path)
        .map_err(|e| GencacheError::io(format!("reading {}", path.display()), e))?;
    Ok(hash_bytes(&contents))
}

/// Hash several files into one fingerprint.
///
/// Each path and its contents feed the digest in the given order, so
/// renaming or reordering inputs changes the result.
pub fn hash_files<P: AsRef<Path>>(paths: &[P]) -> GencacheResult<String> {
    let mut hasher = Sha256::new();

    for path in paths {
        let path = path.as_ref();
        let contents = fs::read(path)
            .map_err(|e| GencacheError::io(format!("reading {}", path.display()), e))?;

        hasher.update(path.to_string_lossy().as_bytes());
        hasher.update([0u8]);
        hasher.update((contents.len() as u64).to_le_bytes());
        hasher.update(&contents);
    }

    debug!("Fingerprinted {} file(s)", paths.len());
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn hash_bytes_known_value() {
        assert_eq!(
            hash_bytes(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn hash_file_matches_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Dockerfile");
        fs::write(&path, b"FROM alpine").unwrap();

        assert_eq!(hash_file(&path).unwrap(), hash_bytes(b"FROM alpine"));
    }

    #[test]
    fn hash_files_order_sensitive() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.yaml");
        let b = dir.path().join("b.yaml");
        fs::write(&a, "a").unwrap();
        fs::write(&b, "b").unwrap();

        let ab = hash_files(&[&a, &b]).unwrap();
        let ba = hash_files(&[&b, &a]).unwrap();
        assert_ne!(ab, ba);
        assert_eq!(ab, hash_files(&[&a, &b]).unwrap());
        assert_eq!(ab.len(), 64);
    }

    #[test]
    fn hash_files_detects_rename() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.yaml");
        let c = dir.path().join("c.yaml");
        fs::write(&a, "same").unwrap();
        fs::write(&c, "same").unwrap();

        assert_ne!(hash_files(&[&a]).unwrap(), hash_files(&[&c]).unwrap());
    }

    #[test]
    fn hash_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = hash_file(&dir.path().join("missing")).unwrap_err();
        assert!(err.is_io());
    }
}
