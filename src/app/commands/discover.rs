use crate::domain::FeedSuggestion;
use crate::ports::FeedDiscovery;

/// Look up a feed for a free-text query.
///
/// Blank queries are answered with `None` without consulting the discovery backend.
pub fn execute<D: FeedDiscovery + ?Sized>(discovery: &D, query: &str) -> Option<FeedSuggestion> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let suggestion = discovery.lookup_feed(query);
    tracing::debug!(query, found = suggestion.is_some(), "feed discovery finished");
    suggestion
}
