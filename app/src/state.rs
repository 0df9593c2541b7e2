//! Editing session state

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use edit_engine::{DesignerEngine, EngineOptions};
use report_model::ItemCatalog;
use store::{DesignerSettings, EditorSettings, RdlWriter, SettingsManager};

/// A designer engine plus the settings it was built from
pub struct Session {
    pub engine: DesignerEngine,
    pub settings: DesignerSettings,
}

impl Session {
    pub fn new(settings: DesignerSettings, catalog: ItemCatalog) -> Self {
        let engine = DesignerEngine::with_catalog(catalog, engine_options(&settings.editor));
        Self { engine, settings }
    }

    /// Load settings and catalog from the given paths, falling back to defaults
    pub fn from_paths(settings: Option<&Path>, catalog: Option<&Path>) -> Result<Self> {
        let path = settings
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(store::SETTINGS_FILE_NAME));
        let mut manager = SettingsManager::with_path(path);
        let settings = manager.load_sync().context("reading settings")?.clone();

        let catalog = match catalog {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading catalog {}", path.display()))?;
                ItemCatalog::from_json(&json)
                    .with_context(|| format!("parsing catalog {}", path.display()))?
            }
            None => ItemCatalog::builtin(),
        };
        tracing::debug!(entries = catalog.len(), "Catalog ready");

        Ok(Self::new(settings, catalog))
    }

    /// Replace the engine's document with a template file
    pub async fn open(&mut self, path: &Path) -> Result<()> {
        let document = store::load_template(path, self.engine.catalog())
            .await
            .with_context(|| format!("loading template {}", path.display()))?;
        self.engine.load_document(document)?;
        Ok(())
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        store::save_template(self.engine.document(), path)
            .await
            .with_context(|| format!("saving template {}", path.display()))
    }

    pub async fn export(&self, path: &Path) -> Result<()> {
        let writer = RdlWriter::with_options(self.settings.export.rdl_options());
        store::save_export(self.engine.document(), &writer, path)
            .await
            .with_context(|| format!("writing export {}", path.display()))
    }

    /// Default export path: `<title>.<ext>` next to `template`
    pub fn export_path_for(&self, template: &Path) -> PathBuf {
        let name = store::export_file_name(self.engine.document(), &self.settings.export.file_extension);
        template
            .parent()
            .map(|dir| dir.join(&name))
            .unwrap_or_else(|| PathBuf::from(&name))
    }
}

pub fn engine_options(editor: &EditorSettings) -> EngineOptions {
    EngineOptions {
        nudge_step: editor.nudge_step,
        nudge_step_large: editor.nudge_step_large,
        min_item_size: editor.min_item_size,
        history_limit: editor.history_limit,
    }
}
