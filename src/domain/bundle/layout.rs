use std::path::PathBuf;

use crate::domain::{ArtifactSlot, IntegrationDomain};

use super::documents::CONTENT_IN_ROOT;

/// Directory that Home Assistant scans for custom integrations.
pub const CUSTOM_COMPONENTS_DIR: &str = "custom_components";

/// Repository layout expected by HACS for a bundle.
///
/// Follows the `content_in_root` flag rendered into `hacs.json`.
#[derive(Debug, Clone)]
pub struct BundleLayout {
    domain: IntegrationDomain,
}

impl BundleLayout {
    pub fn new(domain: IntegrationDomain) -> Self {
        Self { domain }
    }

    /// Directory holding the integration modules, relative to the bundle root.
    pub fn integration_dir(&self) -> PathBuf {
        if CONTENT_IN_ROOT {
            PathBuf::new()
        } else {
            PathBuf::from(CUSTOM_COMPONENTS_DIR).join(self.domain.as_str())
        }
    }

    /// Relative path of an artifact inside the bundle.
    pub fn path_for(&self, slot: ArtifactSlot) -> PathBuf {
        match slot {
            ArtifactSlot::HacsManifest => PathBuf::from(slot.filename()),
            _ => self.integration_dir().join(slot.filename()),
        }
    }

    /// Relative paths of all artifacts in output order.
    pub fn paths(&self) -> Vec<PathBuf> {
        ArtifactSlot::ALL.iter().map(|slot| self.path_for(*slot)).collect()
    }
}
