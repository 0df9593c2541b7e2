//! RDL (Report Definition Language) export
//!
//! Renders a document into a report definition for external reporting
//! tools. Page geometry and item geometry are written in inches, region
//! heights in points. The output is deterministic for a given document.

mod items;
mod units;

pub use units::{format_fixed, format_number, inches, points_to_inches, POINTS_PER_INCH};

use report_model::{Document, RegionName};
use std::borrow::Cow;

/// Default namespace of a 2008 report definition
pub const RDL_NAMESPACE: &str =
    "http://schemas.microsoft.com/sqlserver/reporting/2008/01/reportdefinition";

/// Report designer namespace, bound to the `rd` prefix
pub const RD_NAMESPACE: &str = "http://schemas.microsoft.com/SQLServer/reporting/reportdesigner";

/// Export options
#[derive(Debug, Clone, PartialEq)]
pub struct RdlOptions {
    /// Data set tables are bound to
    pub dataset_name: String,
}

impl Default for RdlOptions {
    fn default() -> Self {
        Self {
            dataset_name: "DataSet1".to_string(),
        }
    }
}

/// Export a document with default options
pub fn export_rdl(document: &Document) -> String {
    RdlWriter::new().write(document)
}

/// Writer for report definitions
#[derive(Debug, Clone, Default)]
pub struct RdlWriter {
    options: RdlOptions,
}

impl RdlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RdlOptions) -> Self {
        Self { options }
    }

    /// Generate the report definition
    pub fn write(&self, document: &Document) -> String {
        let props = &document.report_properties;
        let (page_width, page_height) = props.paper_size.dimensions_in(props.orientation);
        let mut xml = String::new();

        line(&mut xml, 0, r#"<?xml version="1.0" encoding="utf-8"?>"#);
        line(
            &mut xml,
            0,
            &format!(r#"<Report xmlns="{}" xmlns:rd="{}">"#, RDL_NAMESPACE, RD_NAMESPACE),
        );

        let title = if props.title.is_empty() { "Report" } else { props.title.as_str() };
        let author = if props.author.is_empty() {
            "Report Designer"
        } else {
            props.author.as_str()
        };
        element(&mut xml, 1, "Description", &escape(title));
        element(&mut xml, 1, "Author", &escape(author));
        element(&mut xml, 1, "Width", &format!("{}in", format_number(page_width)));
        element(&mut xml, 1, "PageHeight", &format!("{}in", format_number(page_height)));
        element(&mut xml, 1, "PageWidth", &format!("{}in", format_number(page_width)));
        for (name, points) in [
            ("LeftMargin", props.margins.left),
            ("RightMargin", props.margins.right),
            ("TopMargin", props.margins.top),
            ("BottomMargin", props.margins.bottom),
        ] {
            element(
                &mut xml,
                1,
                name,
                &format!("{}in", format_number(points_to_inches(points))),
            );
        }

        // Body is always present, page header and footer only when populated
        self.write_region(&mut xml, document, RegionName::Body, "Body", true);
        self.write_region(&mut xml, document, RegionName::Header, "PageHeader", false);
        self.write_region(&mut xml, document, RegionName::Footer, "PageFooter", false);

        xml.push_str("</Report>");

        tracing::debug!(
            items = document.items.len(),
            bytes = xml.len(),
            "Report definition generated"
        );
        xml
    }

    fn write_region(
        &self,
        xml: &mut String,
        document: &Document,
        region: RegionName,
        tag: &str,
        always: bool,
    ) {
        let mut items = document.items_in_region(region).peekable();
        if !always && items.peek().is_none() {
            return;
        }

        line(xml, 1, &format!("<{}>", tag));
        element(
            xml,
            2,
            "Height",
            &format!("{}pt", format_number(document.regions.height(region))),
        );
        line(xml, 2, "<ReportItems>");
        for item in items {
            items::write_item(xml, item, &self.options);
        }
        line(xml, 2, "</ReportItems>");
        line(xml, 1, &format!("</{}>", tag));
    }
}

/// Escape the five XML metacharacters.
///
/// Characters XML 1.0 cannot carry at all (C0 controls other than tab, line
/// feed and carriage return, U+FFFE and U+FFFF) are dropped first.
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return quick_xml::escape::escape(text);
    }
    let cleaned: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    Cow::Owned(quick_xml::escape::escape(&cleaned).into_owned())
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Append one indented line
fn line(xml: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        xml.push_str("  ");
    }
    xml.push_str(text);
    xml.push('\n');
}

/// Append `<name>value</name>`; `value` must already be escaped
fn element(xml: &mut String, depth: usize, name: &str, value: &str) {
    line(xml, depth, &format!("<{0}>{1}</{0}>", name, value));
}
