//! Designer settings management
//!
//! Settings live in a JSON file. Every section and field has a default, so
//! a partial file only overrides what it names, and an unreadable file falls
//! back to defaults with a warning.

use crate::{RdlOptions, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name used inside a settings directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Main settings container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DesignerSettings {
    /// Canvas editing behaviour
    pub editor: EditorSettings,
    /// Report definition export
    pub export: ExportSettings,
}

/// Canvas editing settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorSettings {
    /// Arrow-key nudge in points
    pub nudge_step: f64,
    /// Shift+arrow nudge in points
    pub nudge_step_large: f64,
    /// Smallest width or height a resize may produce
    pub min_item_size: f64,
    /// Maximum undo entries kept; unbounded when absent
    pub history_limit: Option<usize>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            nudge_step: 1.0,
            nudge_step_large: 10.0,
            min_item_size: 10.0,
            history_limit: None,
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportSettings {
    /// Data set tables are bound to
    pub dataset_name: String,
    /// Extension for exported files
    pub file_extension: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            dataset_name: "DataSet1".to_string(),
            file_extension: crate::EXPORT_EXTENSION.to_string(),
        }
    }
}

impl ExportSettings {
    pub fn rdl_options(&self) -> RdlOptions {
        RdlOptions {
            dataset_name: self.dataset_name.clone(),
        }
    }
}

/// Loads, caches and saves [`DesignerSettings`]
pub struct SettingsManager {
    /// Path to the settings file
    settings_path: PathBuf,
    /// Current settings (cached)
    current: DesignerSettings,
}

impl SettingsManager {
    /// Create a manager for `settings.json` inside `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self::with_path(dir.join(SETTINGS_FILE_NAME))
    }

    /// Create a manager for an explicit settings file
    pub fn with_path(settings_path: PathBuf) -> Self {
        Self {
            settings_path,
            current: DesignerSettings::default(),
        }
    }

    /// Get the path to the settings file
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub async fn load(&mut self) -> Result<&DesignerSettings> {
        self.current = if self.settings_path.exists() {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            parse_or_default(&content)
        } else {
            DesignerSettings::default()
        };
        Ok(&self.current)
    }

    /// Load settings synchronously (for use during startup)
    pub fn load_sync(&mut self) -> Result<&DesignerSettings> {
        self.current = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            parse_or_default(&content)
        } else {
            DesignerSettings::default()
        };
        Ok(&self.current)
    }

    /// Save current settings to disk
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        tokio::fs::write(&self.settings_path, content).await?;
        Ok(())
    }

    /// Save settings synchronously
    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    /// Get current settings
    pub fn get(&self) -> &DesignerSettings {
        &self.current
    }

    /// Update settings and save to disk
    pub async fn update(&mut self, settings: DesignerSettings) -> Result<()> {
        self.current = settings;
        self.save().await
    }

    /// Update settings synchronously
    pub fn update_sync(&mut self, settings: DesignerSettings) -> Result<()> {
        self.current = settings;
        self.save_sync()
    }

    /// Reset settings to defaults synchronously
    pub fn reset_sync(&mut self) -> Result<&DesignerSettings> {
        self.current = DesignerSettings::default();
        self.save_sync()?;
        Ok(&self.current)
    }
}

fn parse_or_default(content: &str) -> DesignerSettings {
    match serde_json::from_str::<DesignerSettings>(content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to parse settings file, using defaults: {}", e);
            DesignerSettings::default()
        }
    }
}
