//! API Facade for the application.
//!
//! Glues adapter construction to command execution. Every function here is also
//! re-exported from the crate root.

use std::path::{Path, PathBuf};

use crate::adapters::{
    EmbeddedTemplates, FilesystemBundleStore, GitRemoteDetector, LazyFeedDiscovery,
};
use crate::app::AppContext;
use crate::app::commands::{discover as discover_cmd, export, generate as generate_cmd};
use crate::domain::{
    AppError, Bundle, DiscoveryConfig, FeedSuggestion, IntegrationConfig, IntegrationDomain,
    Locale, PROJECT_CONFIG_FILE, ProjectConfig, RepositoryCoordinates, generate_with,
    parse_config_content,
};
use crate::ports::RepositoryDetector;

pub use crate::app::commands::export::ExportOutcome;
pub use crate::app::commands::generate::{GenerateOutcome, GenerateRequest, SearchOutcome};
pub use crate::app::commands::repository::RepositorySources;

/// Create an `AppContext` wired to the shared templates and a discovery client built on demand.
fn create_context(
    discovery: &DiscoveryConfig,
) -> Result<AppContext<&'static EmbeddedTemplates, LazyFeedDiscovery>, AppError> {
    let templates = EmbeddedTemplates::shared()?;
    Ok(AppContext::new(templates, LazyFeedDiscovery::new(discovery.clone())))
}

// =============================================================================
// Generation
// =============================================================================

/// Generate the seven bundle files for a configuration.
///
/// Deterministic and free of I/O. The templates are compiled once per process; an error
/// means the embedded templates are broken, never that the input was rejected.
pub fn generate(
    config: &IntegrationConfig,
    locale: Locale,
    repository: Option<&RepositoryCoordinates>,
) -> Result<Bundle, AppError> {
    generate_with(EmbeddedTemplates::shared()?, config, locale, repository)
}

/// Run the full `generate` pipeline: file draft, optional search, flag overrides, prompts.
pub fn generate_from_request<P>(
    request: GenerateRequest,
    discovery: &DiscoveryConfig,
    prompt: P,
) -> Result<Option<GenerateOutcome>, AppError>
where
    P: FnMut(&'static str) -> Result<Option<String>, AppError>,
{
    let ctx = create_context(discovery)?;
    generate_cmd::execute(&ctx, request, prompt)
}

// =============================================================================
// Export
// =============================================================================

/// Write a bundle into the current directory.
pub fn export(
    bundle: &Bundle,
    domain: &IntegrationDomain,
    force: bool,
) -> Result<ExportOutcome, AppError> {
    export_at(std::env::current_dir()?, bundle, domain, force)
}

/// Write a bundle below `root` in the HACS repository layout.
pub fn export_at(
    root: impl Into<PathBuf>,
    bundle: &Bundle,
    domain: &IntegrationDomain,
    force: bool,
) -> Result<ExportOutcome, AppError> {
    let store = FilesystemBundleStore::new(root.into());
    export::execute(&store, bundle, domain, force)
}

// =============================================================================
// Discovery
// =============================================================================

/// Ask the discovery service for a feed. Every failure is logged and yields `None`.
pub fn discover(query: &str, config: &DiscoveryConfig) -> Option<FeedSuggestion> {
    discover_cmd::execute(&LazyFeedDiscovery::new(config.clone()), query)
}

// =============================================================================
// Configuration and repository
// =============================================================================

/// Load a project file from an explicit path.
pub fn load_project_config(path: &Path) -> Result<ProjectConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::ConfigNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_config_content(&content)
}

/// Load `hacsgen.toml` from `dir`, or defaults when the file is absent.
pub fn load_project_config_in(dir: &Path) -> Result<ProjectConfig, AppError> {
    let path = dir.join(PROJECT_CONFIG_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no project file; using defaults");
        return Ok(ProjectConfig::default());
    }
    load_project_config(&path)
}

/// Coordinates of the GitHub `origin` remote of the repository enclosing `path`.
pub fn detect_repository(path: &Path) -> Result<Option<RepositoryCoordinates>, AppError> {
    GitRemoteDetector::new(path.to_path_buf()).detect()
}

/// Resolve repository coordinates from a flag, the git remote below `path`, or the project file.
pub fn resolve_repository(
    path: &Path,
    sources: RepositorySources,
) -> Result<Option<RepositoryCoordinates>, AppError> {
    let detector = GitRemoteDetector::new(path.to_path_buf());
    crate::app::commands::repository::resolve(&detector, sources)
}
