use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;

/// A validated Home Assistant integration domain.
///
/// Guarantees:
/// - Non-empty
/// - Contains only `a-z`, `0-9`, or `_`
///
/// A leading digit is tolerated even though Home Assistant discourages it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntegrationDomain(String);

impl IntegrationDomain {
    /// Accept an identifier that is already valid. Use [`Self::from_name`] to normalize free text.
    pub fn new(value: &str) -> Result<Self, AppError> {
        if is_valid_domain(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(AppError::InvalidDomain(value.to_string()))
        }
    }

    /// Derive an identifier from a display name or discovery suggestion.
    ///
    /// Lower-cases the text and replaces each character outside `[a-z0-9_]` with `_`.
    /// An empty name yields a single `_` so the identifier is never empty.
    pub fn from_name(name: &str) -> Self {
        let sanitized = sanitize_domain(name);
        if sanitized.is_empty() { Self("_".to_string()) } else { Self(sanitized) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lower-case and replace disallowed characters one-for-one with `_`.
pub fn sanitize_domain(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' { c } else { '_' })
        .collect()
}

fn is_valid_domain(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

impl fmt::Display for IntegrationDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IntegrationDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for IntegrationDomain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for IntegrationDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(IntegrationDomain::from_name(&s))
    }
}
