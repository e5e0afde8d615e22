use std::path::PathBuf;

use crate::domain::{AppError, Bundle, BundleLayout, IntegrationDomain};
use crate::ports::BundleStore;

/// Result of writing a bundle to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Export root the paths are relative to.
    pub root: PathBuf,
    /// Written files in bundle order.
    pub written: Vec<PathBuf>,
}

/// Write every artifact of `bundle` to its place in the HACS layout.
///
/// Unless `force` is set, all target paths are checked before anything is written, so an
/// existing file aborts the export without touching the store.
pub fn execute<S: BundleStore + ?Sized>(
    store: &S,
    bundle: &Bundle,
    domain: &IntegrationDomain,
    force: bool,
) -> Result<ExportOutcome, AppError> {
    let layout = BundleLayout::new(domain.clone());
    let placed = bundle.placed(&layout);

    if !force && let Some((path, _)) = placed.iter().find(|(path, _)| store.file_exists(path)) {
        return Err(AppError::BundleExists(path.display().to_string()));
    }

    let mut written = Vec::with_capacity(placed.len());
    for (path, artifact) in placed {
        store.write_file(&path, &artifact.content)?;
        tracing::debug!(path = %path.display(), "wrote bundle file");
        written.push(path);
    }

    Ok(ExportOutcome { root: store.root(), written })
}
