//! Selection commands
//!
//! Selection is transient editor state, so neither command is undoable.

use crate::{Command, CommandOutcome, Result};
use report_model::Document;
use serde::{Deserialize, Serialize};

/// Select an item, either replacing the selection or adding to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectItem {
    pub id: String,
    pub multi_select: bool,
}

impl SelectItem {
    pub fn single(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            multi_select: false,
        }
    }

    pub fn additive(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            multi_select: true,
        }
    }
}

impl Command for SelectItem {
    fn apply(&self, document: &Document) -> Result<CommandOutcome> {
        let mut doc = document.clone();
        for item in &mut doc.items {
            if item.id() == self.id {
                item.selected = true;
            } else if !self.multi_select {
                item.selected = false;
            }
        }
        Ok(CommandOutcome::Applied(doc))
    }

    fn undoable(&self) -> bool {
        false
    }

    fn display_name(&self) -> &str {
        "Select"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Deselect everything
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearSelection;

impl Command for ClearSelection {
    fn apply(&self, document: &Document) -> Result<CommandOutcome> {
        Ok(CommandOutcome::Applied(document.deselected()))
    }

    fn undoable(&self) -> bool {
        false
    }

    fn display_name(&self) -> &str {
        "Clear Selection"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}
