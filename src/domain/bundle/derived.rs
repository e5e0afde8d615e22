use serde::Serialize;

use crate::domain::{IntegrationConfig, RepositoryCoordinates};

use super::entity::sensor_entity_id;

pub(crate) const GENERIC_DOCUMENTATION_URL: &str = "https://github.com/generic/readme";
pub(crate) const GENERIC_ISSUE_TRACKER_URL: &str = "https://github.com/generic/issues";

/// Values computed once per generation and shared by every artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedValues {
    pub scan_interval_minutes: u32,
    pub documentation_url: String,
    pub issue_tracker_url: String,
    pub codeowners: Vec<String>,
    pub sensor_entity_id: String,
}

impl DerivedValues {
    pub fn resolve(config: &IntegrationConfig, repository: Option<&RepositoryCoordinates>) -> Self {
        let (documentation_url, issue_tracker_url, codeowners) = match repository {
            Some(repo) => {
                (repo.documentation_url(), repo.issue_tracker_url(), vec![repo.codeowner()])
            }
            None => (
                GENERIC_DOCUMENTATION_URL.to_string(),
                GENERIC_ISSUE_TRACKER_URL.to_string(),
                Vec::new(),
            ),
        };

        Self {
            scan_interval_minutes: config.scan_interval.minutes(),
            documentation_url,
            issue_tracker_url,
            codeowners,
            sensor_entity_id: sensor_entity_id(&config.domain),
        }
    }
}

/// Variables exposed to the source-code and dashboard templates.
///
/// Repository links are not exposed; only the integration manifest carries them.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext<'a> {
    pub name: &'a str,
    pub domain: &'a str,
    pub feed_url: &'a str,
    pub scan_interval: u32,
    pub sensor_entity_id: &'a str,
}

impl<'a> TemplateContext<'a> {
    pub fn new(config: &'a IntegrationConfig, derived: &'a DerivedValues) -> Self {
        Self {
            name: &config.name,
            domain: config.domain.as_str(),
            feed_url: &config.feed_url,
            scan_interval: derived.scan_interval_minutes,
            sensor_entity_id: &derived.sensor_entity_id,
        }
    }
}
