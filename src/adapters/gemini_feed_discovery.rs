//! Feed discovery backed by the Gemini `generateContent` API, using reqwest.

use std::cell::OnceCell;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, DiscoveryConfig, FeedSuggestion};
use crate::ports::FeedDiscovery;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";

/// HTTP client asking a text-completion model for a feed address.
#[derive(Clone)]
pub struct GeminiFeedDiscovery {
    api_key: Option<String>,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for GeminiFeedDiscovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiFeedDiscovery")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl GeminiFeedDiscovery {
    /// Create a client. Without an API key every lookup yields `None`.
    pub fn new(api_key: Option<String>, config: &DiscoveryConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_url: config.api_url.clone(),
            client,
        })
    }

    /// Create with the API key read from `config.api_key_env`.
    pub fn from_env(config: &DiscoveryConfig) -> Result<Self, AppError> {
        Self::new(std::env::var(&config.api_key_env).ok(), config)
    }
}

/// Discovery client built from `config` on the first lookup.
///
/// Commands that never search never construct the HTTP client, and a construction
/// failure is absorbed like any other lookup failure.
#[derive(Debug)]
pub struct LazyFeedDiscovery {
    config: DiscoveryConfig,
    client: OnceCell<Option<GeminiFeedDiscovery>>,
}

impl LazyFeedDiscovery {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config, client: OnceCell::new() }
    }

    /// Whether the underlying client has been built.
    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }

    fn client(&self) -> Option<&GeminiFeedDiscovery> {
        self.client
            .get_or_init(|| match GeminiFeedDiscovery::from_env(&self.config) {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::warn!(error = %e, "feed discovery unavailable");
                    None
                }
            })
            .as_ref()
    }
}

impl FeedDiscovery for LazyFeedDiscovery {
    fn lookup_feed(&self, query: &str) -> Option<FeedSuggestion> {
        self.client()?.lookup_feed(query)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: ResponseSchema,
}

#[derive(Debug, Serialize)]
struct ResponseSchema {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: SchemaProperties,
    required: [&'static str; 2],
}

#[derive(Debug, Serialize)]
struct SchemaProperties {
    url: StringSchema,
    name: StringSchema,
}

#[derive(Debug, Serialize)]
struct StringSchema {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

fn lookup_prompt(query: &str) -> String {
    format!(
        "Find the most likely RSS feed URL for \"{}\". Return a JSON object with the 'url' and a suggested short 'name' for the integration (PascalCase, no spaces).",
        query
    )
}

fn build_request(query: &str) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content { parts: vec![Part { text: Some(lookup_prompt(query)) }] }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: ResponseSchema {
                kind: "OBJECT",
                properties: SchemaProperties {
                    url: StringSchema { kind: "STRING" },
                    name: StringSchema { kind: "STRING" },
                },
                required: ["url", "name"],
            },
        },
    }
}

impl FeedDiscovery for GeminiFeedDiscovery {
    fn lookup_feed(&self, query: &str) -> Option<FeedSuggestion> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("No API key provided; skipping feed lookup");
            return None;
        };

        match self.send_request(api_key, &build_request(query)) {
            Ok(Some(suggestion)) => {
                tracing::debug!(url = %suggestion.url, name = %suggestion.name, "feed lookup succeeded");
                Some(suggestion)
            }
            Ok(None) => {
                tracing::warn!(query, "feed lookup returned no usable suggestion");
                None
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "feed lookup failed");
                None
            }
        }
    }
}

impl GeminiFeedDiscovery {
    fn send_request(
        &self,
        api_key: &str,
        request: &GenerateRequest,
    ) -> Result<Option<FeedSuggestion>, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(X_GOOG_API_KEY, api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::Discovery(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Discovery(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let envelope: GenerateResponse = response
            .json()
            .map_err(|e| AppError::Discovery(format!("Failed to parse response: {}", e)))?;

        let Some(text) = first_text(envelope) else {
            return Ok(None);
        };
        let suggestion: FeedSuggestion = serde_json::from_str(text.trim())?;
        Ok(suggestion.is_usable().then_some(suggestion))
    }
}

fn first_text(envelope: GenerateResponse) -> Option<String> {
    envelope
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .find_map(|part| part.text)
        .filter(|text| !text.trim().is_empty())
}
