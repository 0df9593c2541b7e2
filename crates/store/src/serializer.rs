//! Template serialization

use crate::{Result, StoreError, TemplateState};
use report_model::{Document, ItemCatalog};

/// Project a document onto its saved form
pub fn to_template(document: &Document) -> TemplateState {
    TemplateState::from(document)
}

/// Serialize a document to pretty-printed template JSON.
///
/// Documents that would not load back (duplicate ids, NaN or infinite
/// numbers) are refused.
pub fn serialize(document: &Document) -> Result<String> {
    document.validate()?;
    let json = serde_json::to_string_pretty(&to_template(document))?;
    Ok(json)
}

/// Parse template JSON into a document.
///
/// Property values are tagged against `catalog`. Items whose plugin is not in
/// the catalog are kept as they are. Nothing is returned on failure, so a bad
/// file never replaces the document being edited.
pub fn deserialize(json: &str, catalog: &ItemCatalog) -> Result<Document> {
    let state: TemplateState =
        serde_json::from_str(json).map_err(|e| StoreError::MalformedTemplate(e.to_string()))?;
    from_template(state, catalog)
}

/// Turn a parsed template into a document
pub fn from_template(state: TemplateState, catalog: &ItemCatalog) -> Result<Document> {
    let mut document = state.into_document();
    document.validate()?;

    let mut unknown = 0;
    for item in &mut document.items {
        if !catalog.contains(item.plugin_id()) {
            unknown += 1;
        }
        catalog.normalize_item(item);
    }
    if unknown > 0 {
        tracing::warn!(unknown, "Template references plugins missing from the catalog");
    }

    tracing::debug!(items = document.items.len(), "Template parsed");
    Ok(document)
}
