use std::path::PathBuf;

use serde::Serialize;

/// Path reported when no output directory could be resolved.
pub const NOT_FOUND_PATH: &str = "Not found";

/// Outcome of one `generate` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResult {
    /// Output directory the files were written under.
    pub path: PathBuf,
    /// Field files written.
    pub file_created: usize,
    /// Field files that could not be written.
    pub file_error: usize,
    /// Errors across all rows, one per skipped row for fatal errors.
    pub field_errors: usize,
    /// Warnings across all rows.
    pub field_warnings: usize,
}

impl GenerateResult {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            file_created: 0,
            file_error: 0,
            field_errors: 0,
            field_warnings: 0,
        }
    }

    /// Result of a run that stopped before reading the definition file.
    pub fn not_found() -> Self {
        Self::new(PathBuf::from(NOT_FOUND_PATH))
    }

    pub fn is_not_found(&self) -> bool {
        self.path.as_os_str() == NOT_FOUND_PATH
    }
}
