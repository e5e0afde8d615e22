use crate::harness::project_config::{ACME_NEWS, with_discovery};
use crate::harness::test_context::TEST_KEY_ENV;
use crate::harness::TestContext;
use predicates::prelude::*;

fn envelope(inner: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": inner }] } }]
    })
    .to_string()
}

#[test]
fn discover_prints_suggestion() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("x-goog-api-key", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(r#"{"url": "https://bbc.test/rss", "name": "BbcWorld"}"#))
        .expect(1)
        .create();

    let ctx = TestContext::new();
    ctx.write_config(&with_discovery(&server.url(), TEST_KEY_ENV));

    ctx.cli()
        .args(["discover", "bbc world"])
        .env(TEST_KEY_ENV, "test-key")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://bbc.test/rss"))
        .stdout(predicate::str::contains("BbcWorld"));
    mock.assert();
}

#[test]
fn discover_without_key_prints_localized_notice() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/").expect(0).create();

    let ctx = TestContext::new();
    ctx.write_config(&with_discovery(&server.url(), TEST_KEY_ENV));

    ctx.cli()
        .args(["discover", "bbc world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not find an RSS feed. Please enter URL manually."));
    ctx.cli()
        .args(["discover", "bbc world", "--locale", "el"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not find an RSS feed.").not());
    mock.assert();
}

#[test]
fn discover_server_error_is_not_retried() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/").with_status(503).expect(1).create();

    let ctx = TestContext::new();
    ctx.write_config(&with_discovery(&server.url(), TEST_KEY_ENV));

    ctx.cli()
        .args(["d", "bbc world"])
        .env(TEST_KEY_ENV, "test-key")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not find an RSS feed."));
    mock.assert();
}

#[test]
fn generate_search_seeds_integration() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(r#"{"url": "https://bbc.test/rss", "name": "BbcWorld"}"#))
        .create();

    let ctx = TestContext::new();
    ctx.write_config(&with_discovery(&server.url(), TEST_KEY_ENV));

    ctx.cli()
        .args(["show", "config_flow.py", "--search", "bbc world"])
        .env(TEST_KEY_ENV, "test-key")
        .assert()
        .success()
        .stdout(predicate::str::contains("default=\"https://bbc.test/rss\""))
        .stdout(predicate::str::contains("title=\"BbcWorld\""))
        .stderr(predicate::str::contains("Found feed"));
}

#[test]
fn generate_search_miss_keeps_file_values() {
    let ctx = TestContext::new();
    ctx.write_config(&format!("{}{}", ACME_NEWS, with_discovery("http://127.0.0.1:9/", TEST_KEY_ENV)));

    ctx.cli()
        .args(["show", "const.py", "--search", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DOMAIN = \"acme_news\""))
        .stderr(predicate::str::contains("Could not find an RSS feed."));
}
