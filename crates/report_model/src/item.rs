//! Placed report items

use crate::{ModelError, Properties, RegionName, Result};
use serde::{Deserialize, Serialize};

/// Width used for geometry when an item has no `width` property
pub const DEFAULT_ITEM_WIDTH: f64 = 100.0;
/// Height used for geometry when an item has no `height` property
pub const DEFAULT_ITEM_HEIGHT: f64 = 30.0;

/// A typed content block placed inside a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportItem {
    id: String,
    plugin_id: String,
    /// Left edge in region-local points
    pub x: f64,
    /// Top edge in region-local points
    pub y: f64,
    pub region: RegionName,
    #[serde(default)]
    pub properties: Properties,
    /// Transient selection state; never persisted
    #[serde(skip)]
    pub selected: bool,
}

impl ReportItem {
    pub fn new(
        id: impl Into<String>,
        plugin_id: impl Into<String>,
        region: RegionName,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id: id.into(),
            plugin_id: plugin_id.into(),
            x,
            y,
            region,
            properties: Properties::new(),
            selected: false,
        }
    }

    /// Unique, immutable after creation
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Catalog entry this item was created from, immutable
    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// Width for alignment and distribution
    pub fn width(&self) -> f64 {
        self.properties.number_or("width", DEFAULT_ITEM_WIDTH)
    }

    /// Height for alignment and distribution
    pub fn height(&self) -> f64 {
        self.properties.number_or("height", DEFAULT_ITEM_HEIGHT)
    }

    /// Reject NaN or infinite coordinates and numeric properties
    pub fn check_finite(&self) -> Result<()> {
        check_coordinates(Some(self.x), Some(self.y))?;
        self.properties.check_finite()
    }

    /// Merge a patch into this item. Properties merge key by key.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(region) = patch.region {
            self.region = region;
        }
        self.properties.merge(patch.properties);
    }
}

/// Partial update of a [`ReportItem`]. `id` and `plugin_id` cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub region: Option<RegionName>,
    pub properties: Properties,
}

impl ItemPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn region(mut self, region: RegionName) -> Self {
        self.region = Some(region);
        self
    }

    pub fn property(mut self, name: impl Into<String>, value: impl Into<crate::PropertyValue>) -> Self {
        self.properties.insert(name, value);
        self
    }

    pub fn size(self, width: f64, height: f64) -> Self {
        self.property("width", width).property("height", height)
    }

    /// Reject NaN or infinite coordinates and numeric properties
    pub fn check_finite(&self) -> Result<()> {
        check_coordinates(self.x, self.y)?;
        self.properties.check_finite()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.region.is_none() && self.properties.is_empty()
    }
}

fn check_coordinates(x: Option<f64>, y: Option<f64>) -> Result<()> {
    for (name, value) in [("x", x), ("y", y)] {
        if value.is_some_and(|v| !v.is_finite()) {
            return Err(ModelError::NonFiniteNumber(name.to_string()));
        }
    }
    Ok(())
}

/// Build an item id of the form `{plugin_id}-{unix millis}`
pub fn generate_item_id(plugin_id: &str) -> String {
    format!("{}-{}", plugin_id, chrono::Utc::now().timestamp_millis())
}

/// Build an item id for which `is_taken` returns false.
///
/// Falls back to a random suffix when two items are created within the same
/// millisecond.
pub fn unique_item_id(plugin_id: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let id = generate_item_id(plugin_id);
    if !is_taken(&id) {
        return id;
    }
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", id, &suffix[..8])
}
