use std::path::PathBuf;

use git2::Repository;

use crate::domain::{AppError, RepositoryCoordinates};
use crate::ports::RepositoryDetector;

const ORIGIN: &str = "origin";

/// Reads GitHub coordinates from the `origin` remote of the enclosing repository.
#[derive(Debug, Clone)]
pub struct GitRemoteDetector {
    start: PathBuf,
}

impl GitRemoteDetector {
    pub fn new(start: PathBuf) -> Self {
        Self { start }
    }
}

impl RepositoryDetector for GitRemoteDetector {
    fn detect(&self) -> Result<Option<RepositoryCoordinates>, AppError> {
        let repo = match Repository::discover(&self.start) {
            Ok(repo) => repo,
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::GitError {
                    command: "git2::Repository::discover".to_string(),
                    details: e.to_string(),
                });
            }
        };

        let remote = match repo.find_remote(ORIGIN) {
            Ok(remote) => remote,
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::GitError {
                    command: "git2::Repository::find_remote(origin)".to_string(),
                    details: e.to_string(),
                });
            }
        };

        let coordinates = remote.url().and_then(|url| RepositoryCoordinates::parse(url).ok());
        if coordinates.is_none() {
            tracing::debug!(url = ?remote.url(), "origin remote is not a GitHub repository");
        }
        Ok(coordinates)
    }
}
