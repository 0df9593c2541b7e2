//! The report document aggregate

use crate::{ModelError, RegionName, RegionSet, ReportItem, ReportProperties, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A report template: properties, the three regions and the placed items.
///
/// Items are kept in insertion order; later items draw on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub report_properties: ReportProperties,
    pub regions: RegionSet,
    pub items: Vec<ReportItem>,
}

impl Document {
    /// Empty document with default properties and region heights
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(&self, id: &str) -> Option<&ReportItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut ReportItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn contains_item(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    pub fn selected_items(&self) -> impl Iterator<Item = &ReportItem> {
        self.items.iter().filter(|item| item.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_items().count()
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected_items().map(|item| item.id().to_string()).collect()
    }

    pub fn items_in_region(&self, region: RegionName) -> impl Iterator<Item = &ReportItem> {
        self.items.iter().filter(move |item| item.region == region)
    }

    /// Check that item ids are unique and every number can be saved
    pub fn validate(&self) -> Result<()> {
        let margins = &self.report_properties.margins;
        for (name, value) in [
            ("margins.top", margins.top),
            ("margins.right", margins.right),
            ("margins.bottom", margins.bottom),
            ("margins.left", margins.left),
        ] {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteNumber(name.to_string()));
            }
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id()) {
                return Err(ModelError::DuplicateItem(item.id().to_string()));
            }
            item.check_finite()?;
        }
        Ok(())
    }

    /// Copy of this document with every item deselected
    pub fn deselected(&self) -> Self {
        let mut doc = self.clone();
        for item in &mut doc.items {
            item.selected = false;
        }
        doc
    }
}
