//! Project configuration parsing.

use crate::domain::AppError;

use super::ProjectConfig;

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ProjectConfig, AppError> {
    let config: ProjectConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
