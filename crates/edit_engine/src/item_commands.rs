//! Commands that add, change and remove items

use crate::{Command, CommandOutcome, EditError, Result};
use report_model::{Document, ItemPatch, ModelError, ReportItem};
use serde::{Deserialize, Serialize};

/// Append an item. The caller supplies a unique id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItem {
    pub item: ReportItem,
}

impl AddItem {
    pub fn new(item: ReportItem) -> Self {
        Self { item }
    }
}

impl Command for AddItem {
    fn apply(&self, document: &Document) -> Result<CommandOutcome> {
        self.item.check_finite()?;
        if document.contains_item(self.item.id()) {
            return Err(EditError::Model(ModelError::DuplicateItem(self.item.id().to_string())));
        }
        let mut doc = document.clone();
        doc.items.push(self.item.clone());
        Ok(CommandOutcome::Applied(doc))
    }

    fn undoable(&self) -> bool {
        true
    }

    fn display_name(&self) -> &str {
        "Add Item"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Merge a patch into one item: move, resize, re-region or edit properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItem {
    pub id: String,
    pub patch: ItemPatch,
}

impl UpdateItem {
    pub fn new(id: impl Into<String>, patch: ItemPatch) -> Self {
        Self {
            id: id.into(),
            patch,
        }
    }
}

impl Command for UpdateItem {
    fn apply(&self, document: &Document) -> Result<CommandOutcome> {
        self.patch.check_finite()?;
        if !document.contains_item(&self.id) {
            return Ok(CommandOutcome::Unchanged);
        }
        let mut doc = document.clone();
        if let Some(item) = doc.item_mut(&self.id) {
            item.apply(self.patch.clone());
        }
        Ok(CommandOutcome::Applied(doc))
    }

    fn undoable(&self) -> bool {
        true
    }

    fn display_name(&self) -> &str {
        "Update Item"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Remove every selected item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteSelectedItems;

impl Command for DeleteSelectedItems {
    fn apply(&self, document: &Document) -> Result<CommandOutcome> {
        let mut doc = document.clone();
        doc.items.retain(|item| !item.selected);
        Ok(CommandOutcome::Applied(doc))
    }

    fn undoable(&self) -> bool {
        true
    }

    fn display_name(&self) -> &str {
        "Delete"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_model::{Properties, RegionName};

    fn doc_with(ids: &[&str]) -> Document {
        let mut doc = Document::new();
        for id in ids {
            doc.items.push(ReportItem::new(*id, "textbox", RegionName::Body, 0.0, 0.0));
        }
        doc
    }

    fn applied(outcome: CommandOutcome) -> Document {
        match outcome {
            CommandOutcome::Applied(doc) => doc,
            CommandOutcome::Unchanged => panic!("expected applied"),
        }
    }

    #[test]
    fn test_add_item_appends() {
        let doc = doc_with(&["a"]);
        let next = applied(
            AddItem::new(ReportItem::new("b", "image", RegionName::Header, 5.0, 6.0))
                .apply(&doc)
                .unwrap(),
        );
        let ids: Vec<&str> = next.items.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(doc.items.len(), 1);
    }

    #[test]
    fn test_add_item_rejects_duplicate_id() {
        let doc = doc_with(&["a"]);
        let result = AddItem::new(ReportItem::new("a", "image", RegionName::Body, 0.0, 0.0)).apply(&doc);
        assert!(matches!(result, Err(EditError::Model(ModelError::DuplicateItem(_)))));
    }

    #[test]
    fn test_update_item_merges() {
        let mut doc = doc_with(&["a"]);
        doc.items[0].properties = Properties::new().with("text", "Hi").with("width", 100.0);
        let next = applied(
            UpdateItem::new("a", ItemPatch::position(30.0, 40.0).property("width", 180.0))
                .apply(&doc)
                .unwrap(),
        );
        let item = next.item("a").unwrap();
        assert_eq!((item.x, item.y), (30.0, 40.0));
        assert_eq!(item.width(), 180.0);
        assert_eq!(item.properties.str_opt("text"), Some("Hi"));
    }

    #[test]
    fn test_update_missing_item_is_noop() {
        let doc = doc_with(&["a"]);
        let outcome = UpdateItem::new("zzz", ItemPatch::position(1.0, 1.0)).apply(&doc).unwrap();
        assert_eq!(outcome, CommandOutcome::Unchanged);
    }

    #[test]
    fn test_delete_selected() {
        let mut doc = doc_with(&["a", "b", "c"]);
        doc.items[0].selected = true;
        doc.items[2].selected = true;
        let next = applied(DeleteSelectedItems.apply(&doc).unwrap());
        assert_eq!(next.items.len(), 1);
        assert_eq!(next.items[0].id(), "b");
    }
}
