use std::cell::RefCell;

use crate::domain::FeedSuggestion;
use crate::ports::FeedDiscovery;

/// Discovery stub returning a canned answer and recording every query.
#[derive(Default)]
pub struct FakeFeedDiscovery {
    response: Option<FeedSuggestion>,
    pub queries: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl FakeFeedDiscovery {
    pub fn found(url: &str, name: &str) -> Self {
        Self {
            response: Some(FeedSuggestion { url: url.to_string(), name: name.to_string() }),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl FeedDiscovery for FakeFeedDiscovery {
    fn lookup_feed(&self, query: &str) -> Option<FeedSuggestion> {
        self.queries.borrow_mut().push(query.to_string());
        self.response.clone()
    }
}
