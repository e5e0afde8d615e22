use std::cell::Cell;

use crate::domain::{AppError, RepositoryCoordinates};
use crate::ports::RepositoryDetector;

/// Detector stub returning fixed coordinates.
#[derive(Default)]
pub struct FakeRepositoryDetector {
    coordinates: Option<RepositoryCoordinates>,
    pub calls: Cell<usize>,
}

#[allow(dead_code)]
impl FakeRepositoryDetector {
    pub fn new(coordinates: Option<RepositoryCoordinates>) -> Self {
        Self { coordinates, calls: Cell::new(0) }
    }
}

impl RepositoryDetector for FakeRepositoryDetector {
    fn detect(&self) -> Result<Option<RepositoryCoordinates>, AppError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.coordinates.clone())
    }
}
