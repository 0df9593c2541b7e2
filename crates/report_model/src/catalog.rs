//! Item catalog: the registry of item types and their property schemas
//!
//! The catalog is read-only configuration for the engine. It is either the
//! built-in set of [`ItemKind`]s or a plugin-config JSON document of the form
//! `{ "plugins": [ { id, displayName, icon, defaultProperties, propertyTypes } ] }`.
//! Entries are not checked against their own `defaultProperties`.

use crate::{ItemKind, ModelError, Properties, ReportItem, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Data fields offered for `dataField` properties
pub const SAMPLE_DATA_FIELDS: [&str; 14] = [
    "customer.name",
    "customer.email",
    "customer.phone",
    "order.id",
    "order.date",
    "order.total",
    "product.name",
    "product.price",
    "product.quantity",
    "company.name",
    "company.address",
    "invoice.number",
    "invoice.date",
    "invoice.dueDate",
];

/// Kind of an editable property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKind {
    Text,
    Number,
    Color,
    Select,
    Boolean,
    DataField,
}

/// Schema of one editable property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyType {
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl PropertyType {
    pub fn new(kind: PropertyKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            min: None,
            max: None,
            options: None,
        }
    }

    pub fn number(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::new(PropertyKind::Number, label)
        }
    }

    pub fn select(label: impl Into<String>, options: &[&str]) -> Self {
        Self {
            options: Some(options.iter().map(|o| o.to_string()).collect()),
            ..Self::new(PropertyKind::Select, label)
        }
    }
}

/// One item type offered by the toolbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub display_name: String,
    pub icon: String,
    #[serde(default)]
    pub default_properties: Properties,
    #[serde(default)]
    pub property_types: BTreeMap<String, PropertyType>,
}

impl CatalogEntry {
    pub fn from_kind(kind: ItemKind) -> Self {
        let mut entry = Self {
            id: kind.id().to_string(),
            display_name: kind.display_name().to_string(),
            icon: kind.icon().to_string(),
            default_properties: kind.default_properties(),
            property_types: kind
                .property_types()
                .into_iter()
                .map(|(name, ty)| (name.to_string(), ty))
                .collect(),
        };
        let defaults = std::mem::take(&mut entry.default_properties);
        entry.default_properties = entry.normalize(defaults);
        entry
    }

    /// Built-in kind behind this entry, if any
    pub fn kind(&self) -> Option<ItemKind> {
        ItemKind::from_plugin_id(&self.id)
    }

    /// Tag property values according to this entry's schema
    pub fn normalize(&self, properties: Properties) -> Properties {
        properties
            .into_iter()
            .map(|(name, value)| match self.property_types.get(&name) {
                Some(ty) => {
                    let value = value.retag(ty.kind);
                    (name, value)
                }
                None => (name, value),
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct PluginConfigFile {
    plugins: Vec<CatalogEntry>,
}

/// Registry of item types, in toolbox order
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCatalog {
    entries: Vec<CatalogEntry>,
}

impl ItemCatalog {
    /// Catalog holding every built-in [`ItemKind`]
    pub fn builtin() -> Self {
        Self {
            entries: ItemKind::ALL.into_iter().map(CatalogEntry::from_kind).collect(),
        }
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.id.is_empty() {
                return Err(ModelError::InvalidCatalog(format!("entry {} has an empty id", index)));
            }
            if entries[..index].iter().any(|other| other.id == entry.id) {
                return Err(ModelError::InvalidCatalog(format!("duplicate plugin id '{}'", entry.id)));
            }
        }
        let entries = entries
            .into_iter()
            .map(|mut entry| {
                let defaults = std::mem::take(&mut entry.default_properties);
                entry.default_properties = entry.normalize(defaults);
                entry
            })
            .collect();
        Ok(Self { entries })
    }

    /// Parse a plugin-config document `{ "plugins": [...] }`
    pub fn from_json(json: &str) -> Result<Self> {
        let file: PluginConfigFile = serde_json::from_str(json)
            .map_err(|e| ModelError::InvalidCatalog(e.to_string()))?;
        Self::from_entries(file.plugins)
    }

    pub fn get(&self, plugin_id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == plugin_id)
    }

    pub fn require(&self, plugin_id: &str) -> Result<&CatalogEntry> {
        self.get(plugin_id)
            .ok_or_else(|| ModelError::UnknownPlugin(plugin_id.to_string()))
    }

    pub fn contains(&self, plugin_id: &str) -> bool {
        self.get(plugin_id).is_some()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tag a property map against the entry for `plugin_id`.
    ///
    /// Unknown plugins leave the map untyped.
    pub fn normalize(&self, plugin_id: &str, properties: Properties) -> Properties {
        match self.get(plugin_id) {
            Some(entry) => entry.normalize(properties),
            None => properties,
        }
    }

    /// Tag an item's properties in place
    pub fn normalize_item(&self, item: &mut ReportItem) {
        let properties = std::mem::take(&mut item.properties);
        item.properties = self.normalize(item.plugin_id(), properties);
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
