//! Command execution engine

use crate::{
    map_key, AddItem, AlignItems, Alignment, ClearSelection, Command, CommandOutcome,
    DeleteSelectedItems, DistributeDirection, DistributeItems, History, KeyEvent, NudgeDirection,
    Result, SelectItem, SetReportProperties, ShortcutAction, Snapshot, UpdateItem,
    UpdateRegionHeight,
};
use report_model::{
    unique_item_id, Document, ItemCatalog, ItemPatch, RegionName, ReportItem,
    ReportPropertiesPatch,
};

/// Tunables for the engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    /// Arrow-key step in points
    pub nudge_step: f64,
    /// Shift+arrow step in points
    pub nudge_step_large: f64,
    /// Smallest width/height a resize may produce
    pub min_item_size: f64,
    /// Maximum number of history entries, `None` for unbounded
    pub history_limit: Option<usize>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            nudge_step: 1.0,
            nudge_step_large: 10.0,
            min_item_size: 10.0,
            history_limit: None,
        }
    }
}

/// Owns the document being edited, its history and the item catalog.
///
/// Every write goes through [`DesignerEngine::execute`], which applies the
/// command and records a history entry when the command is undoable.
pub struct DesignerEngine {
    catalog: ItemCatalog,
    document: Document,
    history: History,
    options: EngineOptions,
}

impl DesignerEngine {
    /// Create an engine with an empty document and the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(ItemCatalog::builtin(), EngineOptions::default())
    }

    /// Create an engine with an empty document
    pub fn with_catalog(catalog: ItemCatalog, options: EngineOptions) -> Self {
        let document = Document::new();
        let history = History::with_limit(Snapshot::of(&document), options.history_limit);
        Self {
            catalog,
            document,
            history,
            options,
        }
    }

    /// Get the current document
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Execute a command. Returns whether the document changed.
    pub fn execute(&mut self, command: Box<dyn Command>) -> Result<bool> {
        match command.apply(&self.document)? {
            CommandOutcome::Applied(document) => {
                self.document = document;
                let recorded = command.undoable();
                if recorded {
                    self.history.record(Snapshot::of(&self.document));
                }
                tracing::debug!(
                    command = command.display_name(),
                    recorded,
                    history_index = self.history.cursor(),
                    "Command applied"
                );
                Ok(true)
            }
            CommandOutcome::Unchanged => {
                tracing::trace!(command = command.display_name(), "Command was a no-op");
                Ok(false)
            }
        }
    }

    /// Replace the document and start a fresh history
    pub fn load_document(&mut self, document: Document) -> Result<()> {
        document.validate()?;
        let mut document = document.deselected();
        for item in &mut document.items {
            self.catalog.normalize_item(item);
        }
        self.history.reset(Snapshot::of(&document));
        self.document = document;
        tracing::info!(items = self.document.items.len(), "Document loaded, history reset");
        Ok(())
    }

    // =========================================================================
    // Report and regions
    // =========================================================================

    pub fn set_report_properties(&mut self, patch: ReportPropertiesPatch) -> Result<bool> {
        self.execute(Box::new(SetReportProperties::new(patch)))
    }

    pub fn update_region_height(&mut self, region: RegionName, height: f64) -> Result<bool> {
        self.execute(Box::new(UpdateRegionHeight::new(region, height)))
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Add a caller-built item. Its properties are tagged against the catalog.
    pub fn add_item(&mut self, mut item: ReportItem) -> Result<bool> {
        self.catalog.normalize_item(&mut item);
        self.execute(Box::new(AddItem::new(item)))
    }

    /// Create an item from a catalog entry and add it. Returns the new id.
    pub fn place_item(&mut self, plugin_id: &str, region: RegionName, x: f64, y: f64) -> Result<String> {
        let entry = self.catalog.require(plugin_id)?;
        let id = unique_item_id(&entry.id, |candidate| self.document.contains_item(candidate));
        let item = ReportItem::new(id.clone(), entry.id.clone(), region, x, y)
            .with_properties(entry.default_properties.clone());
        self.execute(Box::new(AddItem::new(item)))?;
        Ok(id)
    }

    pub fn update_item(&mut self, id: &str, mut patch: ItemPatch) -> Result<bool> {
        if let Some(item) = self.document.item(id) {
            patch.properties = self.catalog.normalize(item.plugin_id(), patch.properties);
        }
        self.execute(Box::new(UpdateItem::new(id, patch)))
    }

    /// Move an item by a delta
    pub fn move_item(&mut self, id: &str, dx: f64, dy: f64) -> Result<bool> {
        let Some(item) = self.document.item(id) else {
            return Ok(false);
        };
        let patch = ItemPatch::position(item.x + dx, item.y + dy);
        self.update_item(id, patch)
    }

    /// Set an item's size, clamping each side to the minimum item size
    pub fn resize_item(&mut self, id: &str, width: f64, height: f64) -> Result<bool> {
        let min = self.options.min_item_size;
        self.update_item(id, ItemPatch::default().size(width.max(min), height.max(min)))
    }

    /// Move every selected item one step, one history entry per item
    pub fn nudge_selected(&mut self, direction: NudgeDirection, large: bool) -> Result<usize> {
        let step = if large {
            self.options.nudge_step_large
        } else {
            self.options.nudge_step
        };
        let (ux, uy) = direction.offset();
        let ids = self.document.selected_ids();
        for id in &ids {
            self.move_item(id, ux * step, uy * step)?;
        }
        Ok(ids.len())
    }

    pub fn delete_selected_items(&mut self) -> Result<bool> {
        self.execute(Box::new(DeleteSelectedItems))
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn select_item(&mut self, id: &str, multi_select: bool) -> Result<bool> {
        let command = if multi_select {
            SelectItem::additive(id)
        } else {
            SelectItem::single(id)
        };
        self.execute(Box::new(command))
    }

    pub fn clear_selection(&mut self) -> Result<bool> {
        self.execute(Box::new(ClearSelection))
    }

    pub fn selected_items(&self) -> Vec<&ReportItem> {
        self.document.selected_items().collect()
    }

    pub fn items_in_region(&self, region: RegionName) -> Vec<&ReportItem> {
        self.document.items_in_region(region).collect()
    }

    // =========================================================================
    // Layout
    // =========================================================================

    pub fn align_items(&mut self, alignment: Alignment) -> Result<bool> {
        self.execute(Box::new(AlignItems::new(alignment)))
    }

    pub fn distribute_items(&mut self, direction: DistributeDirection) -> Result<bool> {
        self.execute(Box::new(DistributeItems::new(direction)))
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Undo the last recorded change. Returns false at the start of history.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                snapshot.restore_into(&mut self.document);
                tracing::debug!(history_index = self.history.cursor(), "Undo");
                true
            }
            None => false,
        }
    }

    /// Redo the next change. Returns false at the tail of history.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                snapshot.restore_into(&mut self.document);
                tracing::debug!(history_index = self.history.cursor(), "Redo");
                true
            }
            None => false,
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Run the action bound to a key, if any. Returns whether anything changed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Result<bool> {
        match map_key(event) {
            Some(action) => self.handle_shortcut(action),
            None => Ok(false),
        }
    }

    pub fn handle_shortcut(&mut self, action: ShortcutAction) -> Result<bool> {
        match action {
            ShortcutAction::DeleteSelection => self.delete_selected_items(),
            ShortcutAction::Undo => Ok(self.undo()),
            ShortcutAction::Redo => Ok(self.redo()),
            ShortcutAction::Nudge { direction, large } => {
                Ok(self.nudge_selected(direction, large)? > 0)
            }
        }
    }
}

impl Default for DesignerEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EditError;
    use report_model::{ModelError, PropertyValue};

    fn engine_with_items(count: usize) -> (DesignerEngine, Vec<String>) {
        let mut engine = DesignerEngine::new();
        let ids = (0..count)
            .map(|i| {
                engine
                    .place_item("textbox", RegionName::Body, i as f64 * 10.0, 0.0)
                    .unwrap()
            })
            .collect();
        (engine, ids)
    }

    #[test]
    fn test_new_engine() {
        let engine = DesignerEngine::new();
        assert!(engine.document().items.is_empty());
        assert_eq!(engine.history().len(), 1);
        assert!(!engine.can_undo());
        assert!(!engine.can_redo());
    }

    #[test]
    fn test_place_item_uses_catalog_defaults() {
        let mut engine = DesignerEngine::new();
        let id = engine.place_item("singlefield", RegionName::Header, 12.0, 8.0).unwrap();
        let item = engine.document().item(&id).unwrap();
        assert!(id.starts_with("singlefield-"));
        assert_eq!(item.region, RegionName::Header);
        assert_eq!(item.width(), 200.0);
        assert_eq!(
            item.properties.get("value"),
            Some(&PropertyValue::data_field("customer.name"))
        );
        assert!(engine.can_undo());
    }

    #[test]
    fn test_place_unknown_plugin() {
        let mut engine = DesignerEngine::new();
        let err = engine.place_item("chart", RegionName::Body, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, crate::EditError::Model(ModelError::UnknownPlugin(_))));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_place_items_get_distinct_ids() {
        let (engine, ids) = engine_with_items(3);
        assert_eq!(engine.document().items.len(), 3);
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
    }

    #[test]
    fn test_selection_is_not_recorded() {
        let (mut engine, ids) = engine_with_items(2);
        let before = engine.history().len();
        engine.select_item(&ids[0], false).unwrap();
        engine.select_item(&ids[1], true).unwrap();
        engine.clear_selection().unwrap();
        assert_eq!(engine.history().len(), before);
    }

    #[test]
    fn test_report_properties_and_region_not_recorded() {
        let mut engine = DesignerEngine::new();
        engine
            .set_report_properties(ReportPropertiesPatch::default().title("Invoice"))
            .unwrap();
        engine.update_region_height(RegionName::Header, 10.0).unwrap();
        assert_eq!(engine.document().report_properties.title, "Invoice");
        assert_eq!(engine.document().regions.height(RegionName::Header), 50.0);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_undo_keeps_report_properties() {
        let (mut engine, _) = engine_with_items(1);
        engine
            .set_report_properties(ReportPropertiesPatch::default().author("Ada"))
            .unwrap();
        assert!(engine.undo());
        assert!(engine.document().items.is_empty());
        assert_eq!(engine.document().report_properties.author, "Ada");
    }

    #[test]
    fn test_update_missing_item_not_recorded() {
        let (mut engine, _) = engine_with_items(1);
        let before = engine.history().len();
        assert!(!engine.update_item("nope", ItemPatch::position(1.0, 1.0)).unwrap());
        assert_eq!(engine.history().len(), before);
    }

    #[test]
    fn test_update_item_tags_properties() {
        let (mut engine, ids) = engine_with_items(1);
        engine
            .update_item(&ids[0], ItemPatch::default().property("color", "#ff0000"))
            .unwrap();
        let item = engine.document().item(&ids[0]).unwrap();
        assert!(matches!(item.properties.get("color"), Some(PropertyValue::Color(c)) if c == "#ff0000"));
    }

    #[test]
    fn test_move_and_resize() {
        let (mut engine, ids) = engine_with_items(1);
        engine.move_item(&ids[0], 5.0, -3.0).unwrap();
        engine.resize_item(&ids[0], 4.0, 60.0).unwrap();
        let item = engine.document().item(&ids[0]).unwrap();
        assert_eq!((item.x, item.y), (5.0, -3.0));
        assert_eq!((item.width(), item.height()), (10.0, 60.0));
    }

    #[test]
    fn test_non_finite_move_rejected() {
        let (mut engine, ids) = engine_with_items(1);
        let before = engine.document().clone();
        let history = engine.history().len();

        let err = engine.move_item(&ids[0], f64::NAN, 0.0).unwrap_err();
        assert!(matches!(err, EditError::Model(ModelError::NonFiniteNumber(_))));
        assert!(engine.resize_item(&ids[0], f64::INFINITY, 20.0).is_err());

        assert_eq!(engine.document(), &before);
        assert_eq!(engine.history().len(), history);
    }

    #[test]
    fn test_nudge_records_one_entry_per_item() {
        let (mut engine, ids) = engine_with_items(3);
        engine.select_item(&ids[0], false).unwrap();
        engine.select_item(&ids[2], true).unwrap();
        let before = engine.history().len();

        let moved = engine.nudge_selected(NudgeDirection::Right, true).unwrap();
        assert_eq!(moved, 2);
        assert_eq!(engine.history().len(), before + 2);
        assert_eq!(engine.document().item(&ids[0]).unwrap().x, 10.0);
        assert_eq!(engine.document().item(&ids[1]).unwrap().x, 10.0);
        assert_eq!(engine.document().item(&ids[2]).unwrap().x, 30.0);
    }

    #[test]
    fn test_handle_key() {
        let (mut engine, ids) = engine_with_items(2);
        engine.select_item(&ids[1], false).unwrap();
        assert!(engine.handle_key(&KeyEvent::new("ArrowUp")).unwrap());
        assert_eq!(engine.document().item(&ids[1]).unwrap().y, -1.0);

        assert!(engine.handle_key(&KeyEvent::new("Delete")).unwrap());
        assert_eq!(engine.document().items.len(), 1);

        assert!(engine.handle_key(&KeyEvent::new("z").ctrl()).unwrap());
        assert_eq!(engine.document().items.len(), 2);

        assert!(engine.handle_key(&KeyEvent::new("y").ctrl()).unwrap());
        assert_eq!(engine.document().items.len(), 1);

        assert!(!engine.handle_key(&KeyEvent::new("q")).unwrap());
    }

    #[test]
    fn test_load_document_resets_history() {
        let (mut engine, _) = engine_with_items(2);
        let mut doc = Document::new();
        let mut item = ReportItem::new("loaded", "textbox", RegionName::Footer, 1.0, 2.0);
        item.selected = true;
        doc.items.push(item);

        engine.load_document(doc).unwrap();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.history().cursor(), 0);
        assert_eq!(engine.document().items.len(), 1);
        assert_eq!(engine.document().selected_count(), 0);
        assert!(!engine.undo());
    }

    #[test]
    fn test_load_document_rejects_duplicate_ids() {
        let (mut engine, _) = engine_with_items(1);
        let mut doc = Document::new();
        doc.items.push(ReportItem::new("dup", "textbox", RegionName::Body, 0.0, 0.0));
        doc.items.push(ReportItem::new("dup", "image", RegionName::Body, 0.0, 0.0));

        assert!(engine.load_document(doc).is_err());
        assert_eq!(engine.document().items.len(), 1);
        assert_eq!(engine.history().len(), 2);
    }
}
