//! Persisted template format

use report_model::{Document, RegionSet, ReportItem, ReportProperties};
use serde::{Deserialize, Serialize};

/// File extension for saved templates
pub const TEMPLATE_EXTENSION: &str = "json";

/// File extension for exported report definitions
pub const EXPORT_EXTENSION: &str = "rdl";

/// The saved form of a document: everything except selection and history.
///
/// Item `selected` flags are never written and load as `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateState {
    pub report_properties: ReportProperties,
    pub regions: RegionSet,
    pub items: Vec<ReportItem>,
}

impl TemplateState {
    pub fn into_document(self) -> Document {
        Document {
            report_properties: self.report_properties,
            regions: self.regions,
            items: self.items,
        }
    }
}

impl From<&Document> for TemplateState {
    fn from(document: &Document) -> Self {
        Self {
            report_properties: document.report_properties.clone(),
            regions: document.regions,
            items: document.deselected().items,
        }
    }
}

/// Default file name for a saved template: `{title}.json`, or `template.json` untitled
pub fn template_file_name(document: &Document) -> String {
    file_name(&document.report_properties.title, "template", TEMPLATE_EXTENSION)
}

/// Default file name for an export: `{title}.rdl`, or `report.rdl` untitled
pub fn export_file_name(document: &Document, extension: &str) -> String {
    file_name(&document.report_properties.title, "report", extension)
}

fn file_name(title: &str, fallback: &str, extension: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = if stem.is_empty() { fallback } else { stem.as_str() };
    format!("{}.{}", stem, extension)
}
