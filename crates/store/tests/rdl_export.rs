//! Integration tests for report definition export
//!
//! Exports are parsed back with quick-xml so structure is checked on the
//! element tree rather than by string matching.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use report_model::{Document, ItemCatalog, Properties, RegionName, ReportItem};
use store::{export_rdl, sample_template};

/// Text content and `Name` attributes keyed by element path
#[derive(Default)]
struct Parsed {
    texts: Vec<(String, String)>,
    names: Vec<(String, String)>,
    paths: Vec<String>,
}

impl Parsed {
    fn text(&self, path: &str) -> Vec<&str> {
        self.texts
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, t)| t.as_str())
            .collect()
    }

    fn names_under(&self, section: &str) -> Vec<&str> {
        let prefix = format!("Report/{}/ReportItems/", section);
        self.names
            .iter()
            .filter(|(p, _)| p.starts_with(&prefix) && p.matches('/').count() == 3)
            .map(|(_, n)| n.as_str())
            .collect()
    }

    fn has(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }
}

fn parse(xml: &str) -> Parsed {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut parsed = Parsed::default();
    let mut path: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                let joined = path.join("/");
                if let Some(attr) = e.try_get_attribute("Name").unwrap() {
                    parsed.names.push((joined.clone(), attr.unescape_value().unwrap().into_owned()));
                }
                parsed.paths.push(joined);
            }
            Ok(Event::End(_)) => {
                path.pop();
            }
            Ok(Event::Text(t)) => {
                parsed.texts.push((path.join("/"), t.unescape().unwrap().into_owned()));
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("export is not well-formed at {}: {}", reader.buffer_position(), e),
            _ => {}
        }
    }
    assert!(path.is_empty(), "unclosed elements: {:?}", path);
    parsed
}

fn placed(plugin_id: &str, id: &str, region: RegionName) -> ReportItem {
    let catalog = ItemCatalog::builtin();
    let defaults = catalog.get(plugin_id).unwrap().default_properties.clone();
    ReportItem::new(id, plugin_id, region, 10.0, 10.0).with_properties(defaults)
}

#[test]
fn escapes_free_text() {
    let mut doc = Document::new();
    doc.report_properties.title = "Q&A <draft>".to_string();
    doc.items.push(
        ReportItem::new("t1", "textbox", RegionName::Body, 0.0, 0.0)
            .with_properties(Properties::new().with("text", r#"A & B < "C""#)),
    );

    let xml = export_rdl(&doc);
    assert!(xml.contains("A &amp; B &lt; &quot;C&quot;"));
    assert!(!xml.contains(r#"A & B"#));

    let parsed = parse(&xml);
    assert_eq!(parsed.text("Report/Description"), vec!["Q&A <draft>"]);
    assert_eq!(parsed.text("Report/Body/ReportItems/Textbox/Value"), vec![r#"A & B < "C""#]);
}

#[test]
fn control_characters_are_dropped() {
    let mut doc = Document::new();
    doc.report_properties.title = "Bell\u{7} report".to_string();
    doc.items.push(
        ReportItem::new("t\u{1}1", "textbox", RegionName::Body, 0.0, 0.0)
            .with_properties(Properties::new().with("text", "a\u{1}b\u{0}c")),
    );

    let xml = export_rdl(&doc);
    assert!(
        !xml.chars().any(|c| c < ' ' && !matches!(c, '\t' | '\n' | '\r')),
        "control character in export"
    );

    let parsed = parse(&xml);
    assert_eq!(parsed.text("Report/Description"), vec!["Bell report"]);
    assert_eq!(parsed.text("Report/Body/ReportItems/Textbox/Value"), vec!["abc"]);
    assert_eq!(parsed.names_under("Body"), vec!["t1"]);
}

#[test]
fn escapes_style_values_and_names() {
    let mut doc = Document::new();
    doc.items.push(
        ReportItem::new(r#"x"'<>&"#, "textbox", RegionName::Body, 0.0, 0.0).with_properties(
            Properties::new()
                .with("text", "ok")
                .with("fontFamily", "Fira <Mono>")
                .with("color", "red\" onload=\"x"),
        ),
    );
    let parsed = parse(&export_rdl(&doc));
    assert_eq!(parsed.names_under("Body"), vec![r#"x"'<>&"#]);
    assert_eq!(
        parsed.text("Report/Body/ReportItems/Textbox/Style/FontFamily"),
        vec!["Fira <Mono>"]
    );
    assert_eq!(
        parsed.text("Report/Body/ReportItems/Textbox/Style/Color"),
        vec!["red\" onload=\"x"]
    );
}

#[test]
fn footer_block_appears_with_first_footer_item() {
    let mut doc = Document::new();
    doc.items.push(placed("textbox", "body-1", RegionName::Body));

    let parsed = parse(&export_rdl(&doc));
    assert!(!parsed.has("Report/PageFooter"));
    assert!(!parsed.has("Report/PageHeader"));

    doc.items.push(placed("qrcode", "footer-1", RegionName::Footer));
    let parsed = parse(&export_rdl(&doc));
    assert!(parsed.has("Report/PageFooter"));
    assert_eq!(parsed.names_under("PageFooter"), vec!["footer-1"]);
    assert_eq!(parsed.names_under("Body"), vec!["body-1"]);
    assert_eq!(parsed.text("Report/PageFooter/Height"), vec!["80pt"]);
}

#[test]
fn body_block_always_present() {
    let parsed = parse(&export_rdl(&Document::new()));
    assert!(parsed.has("Report/Body/ReportItems"));
    assert_eq!(parsed.text("Report/Body/Height"), vec!["500pt"]);
}

#[test]
fn unknown_plugin_is_skipped_but_others_kept() {
    let mut doc = Document::new();
    doc.items.push(ReportItem::new("chart-1", "chart", RegionName::Body, 0.0, 0.0));
    doc.items.push(placed("image", "image-1", RegionName::Body));

    let parsed = parse(&export_rdl(&doc));
    assert_eq!(parsed.names_under("Body"), vec!["image-1"]);
    assert_eq!(doc.items.len(), 2);
}

#[test]
fn table_structure() {
    let mut doc = Document::new();
    let mut table = placed("table", "table-1", RegionName::Body);
    table.properties.insert("columns", 5.0);
    doc.items.push(table);

    let parsed = parse(&export_rdl(&doc));
    let base = "Report/Body/ReportItems/Table";
    assert_eq!(parsed.text(&format!("{}/DataSetName", base)), vec!["DataSet1"]);
    assert_eq!(parsed.text(&format!("{}/TableColumns/TableColumn/Width", base)).len(), 5);
    let headers = parsed.text(&format!(
        "{}/Header/TableRows/TableRow/TableCells/TableCell/ReportItems/Textbox/Value",
        base
    ));
    assert_eq!(headers, vec!["Column 1", "Column 2", "Column 3", "Column 4", "Column 5"]);
    let details = parsed.text(&format!(
        "{}/Details/TableRows/TableRow/TableCells/TableCell/ReportItems/Textbox/Value",
        base
    ));
    assert_eq!(details.last(), Some(&"Data 5"));
}

#[test]
fn sample_template_exports_cleanly() {
    let parsed = parse(&export_rdl(&sample_template()));
    assert_eq!(parsed.text("Report/Description"), vec!["Sample Invoice"]);
    assert_eq!(parsed.names_under("PageHeader").len(), 2);
    assert_eq!(parsed.names_under("Body").len(), 4);
    assert_eq!(parsed.names_under("PageFooter").len(), 2);
}

#[test]
fn export_does_not_mutate_document() {
    let doc = sample_template();
    let before = doc.clone();
    let _ = export_rdl(&doc);
    assert_eq!(doc, before);
}
