//! hacsgen: Generate HACS-ready Home Assistant integrations for RSS feeds.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ExportOutcome, GenerateOutcome, GenerateRequest, RepositorySources, SearchOutcome,
    detect_repository, discover, export, export_at, generate, generate_from_request,
    load_project_config, load_project_config_in, resolve_repository,
};
pub use domain::{
    AppError, Artifact, ArtifactKind, ArtifactSlot, Bundle, BundleLayout,
    DEFAULT_SCAN_INTERVAL_MINUTES, DiscoveryConfig, FeedSuggestion, IntegrationConfig,
    IntegrationDomain, IntegrationDraft, Locale, ProjectConfig, RepositoryCoordinates,
    ScanInterval, sensor_entity_id,
};
