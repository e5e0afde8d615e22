pub mod artifact;
pub mod bundle;
pub mod configuration;
pub mod discovery;
pub mod error;
pub mod integration;
pub mod locale;
pub mod repository;

pub use artifact::{Artifact, ArtifactKind, ArtifactSlot};
pub use bundle::{
    Bundle, BundleLayout, DerivedValues, TemplateContext, TemplateRenderer, generate_with,
    sensor_entity_id,
};
pub use configuration::{
    DiscoveryConfig, IntegrationDraft, PROJECT_CONFIG_FILE, ProjectConfig, parse_config_content,
};
pub use discovery::FeedSuggestion;
pub use error::AppError;
pub use integration::{
    DEFAULT_SCAN_INTERVAL_MINUTES, IntegrationConfig, IntegrationDomain, ScanInterval,
};
pub use locale::Locale;
pub use repository::RepositoryCoordinates;
