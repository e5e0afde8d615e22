use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::ports::BundleStore;

/// Filesystem-based bundle store rooted at an export directory.
#[derive(Debug, Clone)]
pub struct FilesystemBundleStore {
    root: PathBuf,
}

impl FilesystemBundleStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, AppError> {
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(AppError::config_error(format!(
                "Bundle path escapes export root: {}",
                path.display()
            )));
        }
        Ok(self.root.join(path))
    }
}

impl BundleStore for FilesystemBundleStore {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.resolve(path).map(|full| full.exists()).unwrap_or(false)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, content)?;
        Ok(())
    }
}
