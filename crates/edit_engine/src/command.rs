//! Command system for report editing
//!
//! Every mutation of a [`Document`] is a [`Command`]. Commands are pure: they
//! read the current document and either return a new one or report that
//! nothing changed. Whether the change lands in the undo history is declared
//! by the command itself through [`Command::undoable`].

use report_model::{Document, RegionName, ReportPropertiesPatch};
use serde::{Deserialize, Serialize};

/// Result of applying a command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The command produced a new document
    Applied(Document),
    /// A guard condition turned the command into a no-op
    Unchanged,
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied(_))
    }
}

/// Trait for all editing commands
pub trait Command: std::fmt::Debug + Send + Sync {
    /// Apply this command to a document
    fn apply(&self, document: &Document) -> crate::Result<CommandOutcome>;

    /// Whether an applied command records a history entry
    fn undoable(&self) -> bool;

    /// Get a display name for this command
    fn display_name(&self) -> &str;

    /// Clone this command into a box
    fn clone_box(&self) -> Box<dyn Command>;
}

impl Clone for Box<dyn Command> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Shallow-merge into the report properties. Not undoable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetReportProperties {
    pub patch: ReportPropertiesPatch,
}

impl SetReportProperties {
    pub fn new(patch: ReportPropertiesPatch) -> Self {
        Self { patch }
    }
}

impl Command for SetReportProperties {
    fn apply(&self, document: &Document) -> crate::Result<CommandOutcome> {
        let mut doc = document.clone();
        doc.report_properties.apply(self.patch.clone());
        doc.validate()?;
        Ok(CommandOutcome::Applied(doc))
    }

    fn undoable(&self) -> bool {
        false
    }

    fn display_name(&self) -> &str {
        "Set Report Properties"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Resize a region, clamped to the minimum height.
///
/// Not undoable: region drags emit a stream of these and only the geometry
/// of items is tracked in history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRegionHeight {
    pub region: RegionName,
    pub height: f64,
}

impl UpdateRegionHeight {
    pub fn new(region: RegionName, height: f64) -> Self {
        Self { region, height }
    }
}

impl Command for UpdateRegionHeight {
    fn apply(&self, document: &Document) -> crate::Result<CommandOutcome> {
        let mut doc = document.clone();
        doc.regions.set_height(self.region, self.height);
        Ok(CommandOutcome::Applied(doc))
    }

    fn undoable(&self) -> bool {
        false
    }

    fn display_name(&self) -> &str {
        "Resize Region"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}
