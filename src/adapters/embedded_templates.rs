//! Template renderer backed by templates embedded in the binary.

use std::sync::LazyLock;

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::domain::{AppError, ArtifactSlot, TemplateContext, TemplateRenderer};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

static SHARED: LazyLock<Result<EmbeddedTemplates, AppError>> = LazyLock::new(EmbeddedTemplates::new);

/// Home Assistant template expression reading an entity state.
fn ha_state(entity_id: &str) -> String {
    format!("{{{{ states('{}') }}}}", entity_id)
}

/// Home Assistant template expression reading an entity attribute.
fn ha_attr(entity_id: &str, attribute: &str) -> String {
    format!("{{{{ state_attr('{}', '{}') }}}}", entity_id, attribute)
}

/// Template file backing a slot; the JSON documents are serialized instead.
fn template_name(slot: ArtifactSlot) -> Option<&'static str> {
    match slot {
        ArtifactSlot::Init => Some("__init__.py.j2"),
        ArtifactSlot::Constants => Some("const.py.j2"),
        ArtifactSlot::ConfigFlow => Some("config_flow.py.j2"),
        ArtifactSlot::Sensor => Some("sensor.py.j2"),
        ArtifactSlot::LovelaceCard => Some("lovelace_card.yaml.j2"),
        ArtifactSlot::Manifest | ArtifactSlot::HacsManifest => None,
    }
}

/// minijinja environment holding every embedded bundle template.
pub struct EmbeddedTemplates {
    env: Environment<'static>,
}

impl std::fmt::Debug for EmbeddedTemplates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedTemplates")
            .field("templates", &self.env.templates().map(|(name, _)| name).collect::<Vec<_>>())
            .finish()
    }
}

impl EmbeddedTemplates {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_function("ha_state", |entity_id: &str| -> String { ha_state(entity_id) });
        env.add_function("ha_attr", |entity_id: &str, attribute: &str| -> String {
            ha_attr(entity_id, attribute)
        });

        for name in ArtifactSlot::ALL.into_iter().filter_map(template_name) {
            let source = TEMPLATES_DIR.get_file(name).and_then(|file| file.contents_utf8()).ok_or_else(
                || AppError::TemplateRender {
                    template: name.to_string(),
                    details: "embedded template is missing or not UTF-8".to_string(),
                },
            )?;
            env.add_template(name, source).map_err(|e| AppError::TemplateRender {
                template: name.to_string(),
                details: e.to_string(),
            })?;
        }

        Ok(Self { env })
    }

    /// Process-wide instance, compiled on first use.
    pub fn shared() -> Result<&'static Self, AppError> {
        SHARED.as_ref().map_err(|e| AppError::TemplateRender {
            template: "embedded".to_string(),
            details: e.to_string(),
        })
    }
}

impl TemplateRenderer for EmbeddedTemplates {
    fn render(&self, slot: ArtifactSlot, context: &TemplateContext<'_>) -> Result<String, AppError> {
        let name = template_name(slot).ok_or_else(|| AppError::TemplateRender {
            template: slot.to_string(),
            details: "no template backs this artifact".to_string(),
        })?;
        let template = self.env.get_template(name).map_err(|e| AppError::TemplateRender {
            template: name.to_string(),
            details: e.to_string(),
        })?;
        template.render(context).map_err(|e| AppError::TemplateRender {
            template: name.to_string(),
            details: e.to_string(),
        })
    }
}
