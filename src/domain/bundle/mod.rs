//! Bundle generation: one configuration in, seven cross-referencing files out.
//!
//! Generation is a pure function of its inputs. Every artifact reads the same
//! [`DerivedValues`], so the domain, poll interval, and sensor entity id agree across files.

mod derived;
mod documents;
mod entity;
mod layout;

pub use derived::{DerivedValues, TemplateContext};
pub use documents::{CONTENT_IN_ROOT, INTEGRATION_VERSION};
pub use entity::sensor_entity_id;
pub use layout::{BundleLayout, CUSTOM_COMPONENTS_DIR};

use std::path::PathBuf;

use crate::domain::{
    AppError, Artifact, ArtifactSlot, IntegrationConfig, Locale, RepositoryCoordinates,
};

/// Renders the text-template artifacts of a bundle.
///
/// Keeps the template engine (minijinja) out of the domain layer.
pub trait TemplateRenderer {
    /// Render the template backing `slot`.
    fn render(&self, slot: ArtifactSlot, context: &TemplateContext<'_>) -> Result<String, AppError>;
}

impl<T: TemplateRenderer + ?Sized> TemplateRenderer for &T {
    fn render(&self, slot: ArtifactSlot, context: &TemplateContext<'_>) -> Result<String, AppError> {
        (**self).render(slot, context)
    }
}

/// The ordered files of one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    artifacts: Vec<Artifact>,
}

impl Bundle {
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.artifacts.iter()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn filenames(&self) -> Vec<&str> {
        self.artifacts.iter().map(|artifact| artifact.filename.as_str()).collect()
    }

    pub fn get(&self, filename: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|artifact| artifact.filename == filename)
    }

    /// Like [`Bundle::get`], but reports the known filenames on a miss.
    pub fn require(&self, filename: &str) -> Result<&Artifact, AppError> {
        self.get(filename).ok_or_else(|| AppError::ArtifactNotFound {
            name: filename.to_string(),
            available: self.filenames().join(", "),
        })
    }

    /// Pair every artifact with its relative path in the HACS repository layout.
    pub fn placed(&self, layout: &BundleLayout) -> Vec<(PathBuf, &Artifact)> {
        self.artifacts
            .iter()
            .filter_map(|artifact| {
                ArtifactSlot::from_filename(&artifact.filename)
                    .map(|slot| (layout.path_for(slot), artifact))
            })
            .collect()
    }

    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }
}

impl<'a> IntoIterator for &'a Bundle {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}

/// Generate the seven bundle files.
///
/// The locale selects descriptions only. Repository coordinates affect only the
/// integration manifest.
pub fn generate_with<R: TemplateRenderer + ?Sized>(
    renderer: &R,
    config: &IntegrationConfig,
    locale: Locale,
    repository: Option<&RepositoryCoordinates>,
) -> Result<Bundle, AppError> {
    let derived = DerivedValues::resolve(config, repository);
    let context = TemplateContext::new(config, &derived);

    let mut artifacts = Vec::with_capacity(ArtifactSlot::ALL.len());
    for slot in ArtifactSlot::ALL {
        let content = match slot {
            ArtifactSlot::Manifest => documents::integration_manifest(config, &derived)?,
            ArtifactSlot::HacsManifest => documents::hacs_manifest(config)?,
            _ => renderer.render(slot, &context)?,
        };
        artifacts.push(Artifact::new(slot, content, locale.describe(slot)));
    }

    tracing::debug!(domain = %config.domain, %locale, files = artifacts.len(), "generated bundle");
    Ok(Bundle { artifacts })
}
