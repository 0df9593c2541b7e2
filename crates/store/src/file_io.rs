//! File I/O operations

use crate::{RdlWriter, Result, StoreError};
use report_model::{Document, ItemCatalog};
use std::path::Path;

/// Save a document as a template file
pub async fn save_template(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = crate::serialize(document)?;
    tokio::fs::write(path, json).await?;
    tracing::info!(path = %path.display(), "Template saved");
    Ok(())
}

/// Load a template file
pub async fn load_template(path: impl AsRef<Path>, catalog: &ItemCatalog) -> Result<Document> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }

    let json = tokio::fs::read_to_string(path).await?;
    let document = crate::deserialize(&json, catalog)?;
    tracing::info!(path = %path.display(), items = document.items.len(), "Template loaded");
    Ok(document)
}

/// Write a report definition export
pub async fn save_export(document: &Document, writer: &RdlWriter, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, writer.write(document)).await?;
    tracing::info!(path = %path.display(), "Report definition exported");
    Ok(())
}

/// Save a template synchronously
pub fn save_template_sync(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = crate::serialize(document)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "Template saved");
    Ok(())
}

/// Load a template synchronously
pub fn load_template_sync(path: impl AsRef<Path>, catalog: &ItemCatalog) -> Result<Document> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }

    let json = std::fs::read_to_string(path)?;
    let document = crate::deserialize(&json, catalog)?;
    tracing::info!(path = %path.display(), items = document.items.len(), "Template loaded");
    Ok(document)
}

/// Write a report definition export synchronously
pub fn save_export_sync(document: &Document, writer: &RdlWriter, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, writer.write(document))?;
    tracing::info!(path = %path.display(), "Report definition exported");
    Ok(())
}
