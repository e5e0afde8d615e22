//! Feed discovery port definition.

use crate::domain::FeedSuggestion;

/// Port for best-effort feed lookup.
///
/// Every failure (missing credential, transport error, malformed response, nothing found)
/// collapses to `None`. Callers cannot tell which one occurred.
pub trait FeedDiscovery {
    /// Propose a feed address and integration name for a free-text query.
    fn lookup_feed(&self, query: &str) -> Option<FeedSuggestion>;
}
