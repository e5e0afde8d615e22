use crate::harness::TestContext;
use crate::harness::project_config::{ACME_NEWS, ACME_NEWS_WITH_REPO};
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn export_writes_hacs_repository_layout() {
    let ctx = TestContext::new();
    ctx.write_config(ACME_NEWS);
    let out = assert_fs::TempDir::new().unwrap();

    ctx.cli()
        .args(["export"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 7 file(s)"));

    out.child("hacs.json").assert(predicate::str::contains("\"content_in_root\": false"));
    for file in
        ["manifest.json", "__init__.py", "const.py", "config_flow.py", "sensor.py", "lovelace_card.yaml"]
    {
        out.child("custom_components/acme_news").child(file).assert(predicate::path::is_file());
    }
    out.child("custom_components/acme_news/hacs.json").assert(predicate::path::missing());
    out.child("custom_components/acme_news/const.py")
        .assert(predicate::str::contains("DEFAULT_SCAN_INTERVAL = 20"));
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let ctx = TestContext::new();
    ctx.write_config(ACME_NEWS);
    let out = assert_fs::TempDir::new().unwrap();
    out.child("custom_components/acme_news/sensor.py").write_str("# mine\n").unwrap();

    ctx.cli()
        .arg("export")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    out.child("custom_components/acme_news/sensor.py").assert("# mine\n");
    out.child("hacs.json").assert(predicate::path::missing());

    ctx.cli().arg("export").arg(out.path()).arg("--force").assert().success();
    out.child("custom_components/acme_news/sensor.py")
        .assert(predicate::str::contains("ENTITY_ID = \"sensor.acme_news_sensor\""));
}

#[test]
fn export_with_repository_prints_hacs_link() {
    let ctx = TestContext::new();
    ctx.write_config(ACME_NEWS_WITH_REPO);
    let out = assert_fs::TempDir::new().unwrap();

    ctx.cli().arg("x").arg(out.path()).assert().success().stdout(predicate::str::contains(
        "https://my.home-assistant.io/redirect/hacs_repository/?owner=acme&repository=acme-news-ha&category=integration",
    ));
    out.child("custom_components/acme_news/manifest.json")
        .assert(predicate::str::contains("\"@acme\""));
}
