//! Source-hosting coordinates used for documentation links and code ownership.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::domain::AppError;

const GITHUB_BASE: &str = "https://github.com";
const HACS_REDIRECT_BASE: &str = "https://my.home-assistant.io/redirect/hacs_repository/";

/// GitHub owner and repository hosting the generated integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryCoordinates {
    pub owner: String,
    #[serde(rename = "name")]
    pub repository: String,
}

impl RepositoryCoordinates {
    /// Build coordinates; `None` when either part is blank.
    pub fn new(owner: &str, repository: &str) -> Option<Self> {
        let owner = owner.trim();
        let repository = repository.trim();
        if owner.is_empty() || repository.is_empty() {
            return None;
        }
        Some(Self { owner: owner.to_string(), repository: repository.to_string() })
    }

    /// Parse `owner/repo`, `https://github.com/owner/repo(.git)`, or `git@github.com:owner/repo(.git)`.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        let path = trimmed
            .strip_prefix("git@github.com:")
            .or_else(|| trimmed.strip_prefix("https://github.com/"))
            .or_else(|| trimmed.strip_prefix("http://github.com/"))
            .unwrap_or(trimmed);
        let path = path.trim_end_matches('/').trim_end_matches(".git");

        let mut parts = path.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repository), None) => Self::new(owner, repository)
                .ok_or_else(|| AppError::InvalidRepository(input.to_string())),
            _ => Err(AppError::InvalidRepository(input.to_string())),
        }
    }

    /// Repository home page, used as the documentation link.
    pub fn documentation_url(&self) -> String {
        format!("{}/{}/{}", GITHUB_BASE, self.owner, self.repository)
    }

    pub fn issue_tracker_url(&self) -> String {
        format!("{}/issues", self.documentation_url())
    }

    /// Code owner handle as listed in the integration manifest.
    pub fn codeowner(&self) -> String {
        format!("@{}", self.owner)
    }

    /// "Add custom repository" redirect link for HACS.
    pub fn hacs_install_url(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("owner", &self.owner)
            .append_pair("repository", &self.repository)
            .append_pair("category", "integration")
            .finish();
        format!("{}?{}", HACS_REDIRECT_BASE, query)
    }
}
