//! On-disk record store: one JSON document per patient.

mod paths;
mod records;

pub use paths::*;
#[allow(unused_imports)]
pub use records::*;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::StoreConfig;

/// Storage errors. Every variant carries the underlying cause so the
/// operator sees why a save or load was refused.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to create storage directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read record file {path}: {source}")]
    ReadRecord {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write record file {path}: {source}")]
    WriteRecord {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("record file {path} is not a valid patient document: {source}")]
    ParseRecord {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize patient record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage root {path} is not writable: {source}")]
    RootNotWritable {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// File-backed store for patient records.
///
/// Each patient lives in its own directory under the storage root, named
/// from the sanitized identifier, holding a single JSON document. Every save
/// is a whole-document read-modify-write; that is only safe with a single
/// operator, which is this tool's stated operating model.
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    /// Open a store over a validated configuration.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        config.validate_writable()?;
        Ok(Self {
            root: config.data_dir().to_path_buf(),
        })
    }

    /// Open a store rooted at `root` without the writability probe.
    ///
    /// Useful for read-only consumers and tests; `save` still creates the
    /// directories it needs.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The storage root this store reads and writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
