//! Subcommand implementations

use std::path::Path;

use anyhow::{bail, Context, Result};
use edit_engine::{Alignment, DistributeDirection, MIN_ALIGN_SELECTION, MIN_DISTRIBUTE_SELECTION};
use report_model::{Document, ItemCatalog, RegionName, SAMPLE_DATA_FIELDS};

use crate::state::Session;

/// Write the default or sample template
pub async fn run_new(session: &mut Session, sample: bool, output: &Path) -> Result<()> {
    if sample {
        session.engine.load_document(store::sample_template())?;
    }
    session.save(output).await?;
    println!("Wrote {}", output.display());
    Ok(())
}

pub async fn run_validate(session: &mut Session, template: &Path) -> Result<()> {
    session.open(template).await?;
    let report = TemplateReport::build(session.engine.document(), session.engine.catalog());
    print!("{}", report);
    Ok(())
}

pub async fn run_export(session: &mut Session, template: &Path, output: Option<&Path>) -> Result<()> {
    session.open(template).await?;
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => session.export_path_for(template),
    };
    session.export(&output).await?;
    println!("Exported {}", output.display());
    Ok(())
}

pub fn run_catalog(catalog: &ItemCatalog, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({ "plugins": catalog.entries() });
        println!("{}", serde_json::to_string_pretty(&value).context("encoding catalog")?);
        return Ok(());
    }

    for entry in catalog.entries() {
        println!("{:<12} {:<14} {} properties", entry.id, entry.display_name, entry.property_types.len());
    }
    println!();
    println!("Data fields: {}", SAMPLE_DATA_FIELDS.join(", "));
    Ok(())
}

pub async fn run_align(
    session: &mut Session,
    template: &Path,
    alignment: Alignment,
    ids: &[String],
    output: Option<&Path>,
) -> Result<()> {
    session.open(template).await?;
    select_all(session, ids, MIN_ALIGN_SELECTION)?;
    session.engine.align_items(alignment)?;
    finish_layout(session, template, output).await
}

pub async fn run_distribute(
    session: &mut Session,
    template: &Path,
    direction: DistributeDirection,
    ids: &[String],
    output: Option<&Path>,
) -> Result<()> {
    session.open(template).await?;
    select_all(session, ids, MIN_DISTRIBUTE_SELECTION)?;
    session.engine.distribute_items(direction)?;
    finish_layout(session, template, output).await
}

/// Select exactly `ids`, refusing unknown ids and selections the operation would ignore
fn select_all(session: &mut Session, ids: &[String], minimum: usize) -> Result<()> {
    session.engine.clear_selection()?;
    for id in ids {
        if !session.engine.document().contains_item(id) {
            bail!("no item with id '{}'", id);
        }
        session.engine.select_item(id, true)?;
    }
    let selected = session.engine.selected_items().len();
    if selected < minimum {
        bail!("needs at least {} distinct items, got {}", minimum, selected);
    }
    Ok(())
}

async fn finish_layout(session: &Session, template: &Path, output: Option<&Path>) -> Result<()> {
    let output = output.unwrap_or(template);
    session.save(output).await?;
    println!("Wrote {}", output.display());
    Ok(())
}

/// Summary printed by `validate`
#[derive(Debug, PartialEq)]
pub struct TemplateReport {
    pub title: String,
    pub counts: Vec<(RegionName, usize)>,
    /// `(item id, plugin id)` for items the catalog does not know
    pub unknown: Vec<(String, String)>,
}

impl TemplateReport {
    pub fn build(document: &Document, catalog: &ItemCatalog) -> Self {
        let counts = RegionName::ALL
            .into_iter()
            .map(|region| (region, document.items_in_region(region).count()))
            .collect();
        let unknown = document
            .items
            .iter()
            .filter(|item| !catalog.contains(item.plugin_id()))
            .map(|item| (item.id().to_string(), item.plugin_id().to_string()))
            .collect();
        Self {
            title: document.report_properties.title.clone(),
            counts,
            unknown,
        }
    }
}

impl std::fmt::Display for TemplateReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Template: {}", self.title)?;
        for (region, count) in &self.counts {
            writeln!(f, "  {:<7} {} item(s)", region, count)?;
        }
        if self.unknown.is_empty() {
            writeln!(f, "All items have a catalog entry")?;
        } else {
            writeln!(f, "Items not in the catalog (kept, skipped on export):")?;
            for (id, plugin) in &self.unknown {
                writeln!(f, "  {} ({})", id, plugin)?;
            }
        }
        Ok(())
    }
}
