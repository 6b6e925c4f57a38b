//! Storage configuration, resolved once at startup.
//!
//! The storage root is a plain value handed to the core by the embedding
//! application; nothing in the library reads environment variables or
//! mutates the path later. Validating writability happens here, before the
//! first save, so a misconfigured root fails at startup instead of at the
//! end of a form.

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::{StoreError, StoreResult};

/// Default storage root, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Resolved storage configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    data_dir: PathBuf,
}

impl StoreConfig {
    /// Create a configuration rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Ensure the storage root exists and accepts writes.
    ///
    /// Creates the directory if needed, then probes an actual write — a
    /// directory can exist and still deny writes (read-only mounts,
    /// permission changes), and that must surface before any record save.
    pub fn validate_writable(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::CreateDir {
            path: self.data_dir.clone(),
            source,
        })?;

        let probe = self.data_dir.join(".write_probe");
        fs::write(&probe, b"probe").map_err(|source| StoreError::RootNotWritable {
            path: self.data_dir.clone(),
            source,
        })?;
        let _ = fs::remove_file(&probe);

        tracing::debug!(root = %self.data_dir.display(), "storage root validated");
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_creates_missing_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let config = StoreConfig::new(&root);

        config.validate_writable().unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn test_validate_rejects_file_as_root() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("not-a-dir");
        std::fs::write(&file_path, "x").unwrap();

        let config = StoreConfig::new(&file_path);
        let err = config.validate_writable().unwrap_err();
        assert!(matches!(err, StoreError::CreateDir { .. }));
    }

    #[test]
    fn test_validate_leaves_no_probe_behind() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::new(dir.path());
        config.validate_writable().unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_default_points_at_data_dir() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir(), Path::new(DEFAULT_DATA_DIR));
    }
}
