use std::fmt;

use serde::Serialize;

/// Content category of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// JSON key-value document.
    StructuredData,
    /// Python module loaded by Home Assistant.
    SourceCode,
    /// YAML consumed by the dashboard renderer.
    DeclarativeConfig,
}

impl ArtifactKind {
    /// Syntax name for highlighting.
    pub fn language(&self) -> &'static str {
        match self {
            ArtifactKind::StructuredData => "json",
            ArtifactKind::SourceCode => "python",
            ArtifactKind::DeclarativeConfig => "yaml",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::StructuredData => "structured-data",
            ArtifactKind::SourceCode => "source-code",
            ArtifactKind::DeclarativeConfig => "declarative-config",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The seven files of an integration bundle, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactSlot {
    /// Integration manifest (`manifest.json`).
    Manifest,
    /// Setup and teardown entry points (`__init__.py`).
    Init,
    /// Shared constants (`const.py`).
    Constants,
    /// One-step user configuration form (`config_flow.py`).
    ConfigFlow,
    /// Polling feed sensor (`sensor.py`).
    Sensor,
    /// HACS distribution manifest (`hacs.json`).
    HacsManifest,
    /// Example dashboard card (`lovelace_card.yaml`).
    LovelaceCard,
}

impl ArtifactSlot {
    /// All slots in output order.
    pub const ALL: [ArtifactSlot; 7] = [
        ArtifactSlot::Manifest,
        ArtifactSlot::Init,
        ArtifactSlot::Constants,
        ArtifactSlot::ConfigFlow,
        ArtifactSlot::Sensor,
        ArtifactSlot::HacsManifest,
        ArtifactSlot::LovelaceCard,
    ];

    pub fn filename(&self) -> &'static str {
        match self {
            ArtifactSlot::Manifest => "manifest.json",
            ArtifactSlot::Init => "__init__.py",
            ArtifactSlot::Constants => "const.py",
            ArtifactSlot::ConfigFlow => "config_flow.py",
            ArtifactSlot::Sensor => "sensor.py",
            ArtifactSlot::HacsManifest => "hacs.json",
            ArtifactSlot::LovelaceCard => "lovelace_card.yaml",
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            ArtifactSlot::Manifest | ArtifactSlot::HacsManifest => ArtifactKind::StructuredData,
            ArtifactSlot::Init
            | ArtifactSlot::Constants
            | ArtifactSlot::ConfigFlow
            | ArtifactSlot::Sensor => ArtifactKind::SourceCode,
            ArtifactSlot::LovelaceCard => ArtifactKind::DeclarativeConfig,
        }
    }

    pub fn from_filename(filename: &str) -> Option<ArtifactSlot> {
        Self::ALL.into_iter().find(|slot| slot.filename() == filename)
    }
}

impl fmt::Display for ArtifactSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filename())
    }
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub filename: String,
    pub kind: ArtifactKind,
    pub language: &'static str,
    pub description: String,
    pub content: String,
}

impl Artifact {
    pub fn new(slot: ArtifactSlot, content: String, description: impl Into<String>) -> Self {
        let kind = slot.kind();
        Self {
            filename: slot.filename().to_string(),
            kind,
            language: kind.language(),
            description: description.into(),
            content,
        }
    }
}
