//! District lookup collaborator.
//!
//! The district of residence comes from a newline-delimited text file
//! maintained outside this crate. The list is loaded once per session and
//! is allowed to degrade: a missing or unreadable file yields a sentinel
//! placeholder list so the workflow keeps running, it never blocks entry.

use std::path::Path;

/// Conventional file name for the district list.
pub const DISTRICTS_FILE: &str = "districts.txt";

/// Placeholder entry shown when the list file is missing.
pub const MISSING_FILE_SENTINEL: &str = "File not found - Please check districts.txt";

/// Placeholder entry shown when the list file cannot be read.
pub const READ_ERROR_SENTINEL: &str = "Error loading districts";

/// The district pick list offered by the baseline form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictList {
    names: Vec<String>,
    degraded: bool,
}

impl DistrictList {
    /// Load the list from a newline-delimited file.
    ///
    /// Lines are trimmed, blanks dropped, and the result sorted for
    /// presentation. Failures degrade to a one-entry sentinel list.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let mut names: Vec<String> = contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                names.sort();
                Self {
                    names,
                    degraded: false,
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "district list file not found");
                Self {
                    names: vec![MISSING_FILE_SENTINEL.to_string()],
                    degraded: true,
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read district list");
                Self {
                    names: vec![READ_ERROR_SENTINEL.to_string()],
                    degraded: true,
                }
            }
        }
    }

    /// District names in presentation order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether this list is a degraded placeholder rather than real data.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Whether a district name appears in the list.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}
