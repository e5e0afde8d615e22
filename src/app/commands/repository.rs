use crate::domain::{AppError, RepositoryCoordinates};
use crate::ports::RepositoryDetector;

/// Where repository coordinates may come from, highest precedence first.
#[derive(Debug, Clone, Default)]
pub struct RepositorySources {
    /// Coordinates given on the command line (`owner/repo` or a GitHub URL).
    pub explicit: Option<String>,
    /// Read the `origin` remote of the enclosing git repository.
    pub from_git: bool,
    /// Coordinates from the project file.
    pub configured: Option<RepositoryCoordinates>,
}

/// Resolve the coordinates used for manifest links.
///
/// The detector is consulted only when `from_git` is set and nothing explicit was given.
pub fn resolve<G: RepositoryDetector + ?Sized>(
    detector: &G,
    sources: RepositorySources,
) -> Result<Option<RepositoryCoordinates>, AppError> {
    if let Some(text) = sources.explicit.as_deref().filter(|text| !text.trim().is_empty()) {
        return RepositoryCoordinates::parse(text).map(Some);
    }
    if sources.from_git {
        if let Some(detected) = detector.detect()? {
            return Ok(Some(detected));
        }
        tracing::warn!("No GitHub origin remote found; falling back to configured repository");
    }
    Ok(sources.configured)
}
