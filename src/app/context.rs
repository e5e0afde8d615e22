use crate::domain::TemplateRenderer;
use crate::ports::FeedDiscovery;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: TemplateRenderer, D: FeedDiscovery> {
    templates: R,
    discovery: D,
}

impl<R: TemplateRenderer, D: FeedDiscovery> AppContext<R, D> {
    /// Create a new application context.
    pub fn new(templates: R, discovery: D) -> Self {
        Self { templates, discovery }
    }

    /// Get a reference to the template renderer.
    pub fn templates(&self) -> &R {
        &self.templates
    }

    /// Get a reference to the feed discovery assistant.
    pub fn discovery(&self) -> &D {
        &self.discovery
    }
}
