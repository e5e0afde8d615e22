//! Project file fixtures.

/// Complete project file for the Acme News integration.
pub(crate) const ACME_NEWS: &str = r#"
[integration]
name = "Acme News"
feed_url = "https://acme.test/rss.xml"
scan_interval = 20
"#;

/// Acme News with repository coordinates and Greek descriptions.
pub(crate) const ACME_NEWS_WITH_REPO: &str = r#"
locale = "el"

[integration]
name = "Acme News"
feed_url = "https://acme.test/rss.xml"
scan_interval = 20

[repository]
owner = "acme"
name = "acme-news-ha"
"#;

/// Project file pointing discovery at `api_url` and reading the key from `key_env`.
pub(crate) fn with_discovery(api_url: &str, key_env: &str) -> String {
    format!(
        r#"
[discovery]
api_url = "{}"
timeout_secs = 5
api_key_env = "{}"
"#,
        api_url, key_env
    )
}
