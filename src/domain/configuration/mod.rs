pub mod loader;
pub mod project_config;

pub use loader::parse_config_content;
pub use project_config::{
    DEFAULT_API_KEY_ENV, DiscoveryConfig, IntegrationDraft, PROJECT_CONFIG_FILE, ProjectConfig,
};
