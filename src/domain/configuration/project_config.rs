//! Project configuration loaded from `hacsgen.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    AppError, FeedSuggestion, IntegrationConfig, IntegrationDomain, Locale, RepositoryCoordinates,
    ScanInterval,
};

/// Default file name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "hacsgen.toml";

/// Environment variable holding the discovery API key unless overridden.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Language of artifact descriptions.
    #[serde(default)]
    pub locale: Locale,
    /// Integration fields; any may be left out and supplied on the command line.
    #[serde(default)]
    pub integration: IntegrationDraft,
    /// Source-hosting coordinates.
    #[serde(default)]
    pub repository: Option<RepositoryCoordinates>,
    /// Feed discovery assistant.
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.discovery.validate()
    }

    /// Repository coordinates with blank entries treated as absent.
    pub fn repository(&self) -> Option<RepositoryCoordinates> {
        self.repository
            .as_ref()
            .and_then(|repo| RepositoryCoordinates::new(&repo.owner, &repo.repository))
    }
}

/// Partially filled integration fields, as held by the configuration editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrationDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub domain: Option<IntegrationDomain>,
    #[serde(default)]
    pub feed_url: Option<String>,
    #[serde(default)]
    pub scan_interval: Option<ScanInterval>,
}

impl IntegrationDraft {
    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: IntegrationDraft) -> IntegrationDraft {
        IntegrationDraft {
            name: other.name.or(self.name),
            domain: other.domain.or(self.domain),
            feed_url: other.feed_url.or(self.feed_url),
            scan_interval: other.scan_interval.or(self.scan_interval),
        }
    }

    /// Seed name and feed address from a discovery result.
    ///
    /// The domain is cleared so it is derived again from whichever name ends up in the draft.
    /// `None` leaves the draft untouched. Returns whether anything changed.
    pub fn apply_suggestion(&mut self, suggestion: Option<&FeedSuggestion>) -> bool {
        let Some(suggestion) = suggestion else {
            return false;
        };
        self.name = Some(suggestion.name.clone());
        self.domain = None;
        self.feed_url = Some(suggestion.url.clone());
        true
    }

    /// Name of the first required field still missing.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Some("name");
        }
        if self.feed_url.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Some("feed_url");
        }
        None
    }

    /// Complete the draft. The domain is derived from the name when not given.
    pub fn into_config(self) -> Result<IntegrationConfig, AppError> {
        if let Some(field) = self.missing_field() {
            return Err(AppError::Configuration(format!(
                "Missing integration {}: pass it on the command line or set it in {}",
                field, PROJECT_CONFIG_FILE
            )));
        }
        let (Some(name), Some(feed_url)) = (self.name, self.feed_url) else {
            return Err(AppError::config_error("Missing integration name or feed_url"));
        };

        let mut config = IntegrationConfig::new(name, feed_url)
            .with_scan_interval(self.scan_interval.unwrap_or_default());
        if let Some(domain) = self.domain {
            config = config.with_domain(domain);
        }
        Ok(config)
    }
}

/// Feed discovery API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// `generateContent` endpoint of the text-completion model.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl DiscoveryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "discovery.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "discovery.api_key_env must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse(
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent",
    )
    .expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}
