use serde::{Deserialize, Serialize};

/// A proposed feed address and integration name returned by a discovery lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSuggestion {
    pub url: String,
    pub name: String,
}

impl FeedSuggestion {
    /// A suggestion is usable only when both fields carry text.
    pub fn is_usable(&self) -> bool {
        !self.url.trim().is_empty() && !self.name.trim().is_empty()
    }
}
