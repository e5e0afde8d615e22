//! JSON documents of the bundle: the integration manifest and the HACS manifest.

use serde::Serialize;

use crate::domain::{AppError, IntegrationConfig};

use super::derived::DerivedValues;

pub const IOT_CLASS: &str = "cloud_polling";
pub const FEEDPARSER_REQUIREMENT: &str = "feedparser>=6.0.0";
pub const INTEGRATION_VERSION: &str = "1.0.0";

/// Integration files live under `custom_components/<domain>/`, not at the repository root.
pub const CONTENT_IN_ROOT: bool = false;
pub const ZIP_RELEASE: bool = false;
pub const RENDER_README: bool = true;

/// `manifest.json` as read by Home Assistant's loader.
#[derive(Debug, Serialize)]
struct IntegrationManifest<'a> {
    domain: &'a str,
    name: &'a str,
    codeowners: &'a [String],
    config_flow: bool,
    dependencies: [&'a str; 0],
    documentation: &'a str,
    iot_class: &'a str,
    issue_tracker: &'a str,
    requirements: [&'a str; 1],
    version: &'a str,
}

/// `hacs.json` as read by HACS when the repository is added.
#[derive(Debug, Serialize)]
struct HacsManifest<'a> {
    name: &'a str,
    render_readme: bool,
    content_in_root: bool,
    zip_release: bool,
}

pub fn integration_manifest(
    config: &IntegrationConfig,
    derived: &DerivedValues,
) -> Result<String, AppError> {
    let manifest = IntegrationManifest {
        domain: config.domain.as_str(),
        name: &config.name,
        codeowners: &derived.codeowners,
        config_flow: true,
        dependencies: [],
        documentation: &derived.documentation_url,
        iot_class: IOT_CLASS,
        issue_tracker: &derived.issue_tracker_url,
        requirements: [FEEDPARSER_REQUIREMENT],
        version: INTEGRATION_VERSION,
    };
    Ok(serde_json::to_string_pretty(&manifest)?)
}

pub fn hacs_manifest(config: &IntegrationConfig) -> Result<String, AppError> {
    let manifest = HacsManifest {
        name: &config.name,
        render_readme: RENDER_README,
        content_in_root: CONTENT_IN_ROOT,
        zip_release: ZIP_RELEASE,
    };
    Ok(serde_json::to_string_pretty(&manifest)?)
}
