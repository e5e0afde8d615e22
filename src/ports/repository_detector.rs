//! Repository detection port definition.

use crate::domain::{AppError, RepositoryCoordinates};

/// Port for inferring source-hosting coordinates from the local checkout.
pub trait RepositoryDetector {
    /// Coordinates of the `origin` remote, or `None` when there is no usable GitHub remote.
    fn detect(&self) -> Result<Option<RepositoryCoordinates>, AppError>;
}
