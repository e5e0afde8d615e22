//! Integration configuration: the sole input of bundle generation.

mod domain_id;
mod scan_interval;

pub use domain_id::{IntegrationDomain, sanitize_domain};
pub use scan_interval::{DEFAULT_SCAN_INTERVAL_MINUTES, ScanInterval};

use serde::{Deserialize, Serialize};

use crate::domain::FeedSuggestion;

/// User-supplied parameters driving bundle generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    /// Display label, rendered verbatim into every artifact that names the integration.
    pub name: String,
    /// Machine identifier shared by every artifact.
    pub domain: IntegrationDomain,
    /// Syndication feed address. Not validated.
    pub feed_url: String,
    /// Normalized poll interval.
    pub scan_interval: ScanInterval,
}

impl IntegrationConfig {
    /// Create a configuration with the domain derived from `name` and the default interval.
    pub fn new(name: impl Into<String>, feed_url: impl Into<String>) -> Self {
        let name = name.into();
        let domain = IntegrationDomain::from_name(&name);
        Self { name, domain, feed_url: feed_url.into(), scan_interval: ScanInterval::default() }
    }

    pub fn with_domain(mut self, domain: IntegrationDomain) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_scan_interval(mut self, scan_interval: ScanInterval) -> Self {
        self.scan_interval = scan_interval;
        self
    }

    /// Seed name, feed address, and derived domain from a discovery result.
    ///
    /// `None` leaves the configuration untouched. Returns whether anything changed.
    pub fn apply_suggestion(&mut self, suggestion: Option<&FeedSuggestion>) -> bool {
        let Some(suggestion) = suggestion else {
            return false;
        };
        self.name = suggestion.name.clone();
        self.domain = IntegrationDomain::from_name(&suggestion.name);
        self.feed_url = suggestion.url.clone();
        true
    }
}
