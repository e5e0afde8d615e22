//! Bundle output port definition.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for writing bundle files below an export root.
///
/// All `path` arguments are relative to the root.
pub trait BundleStore {
    /// Absolute location of the export root.
    fn root(&self) -> PathBuf;

    /// Check whether a file exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
