//! Per-item report definition elements

use super::{element, escape, format_number, inches, line, RdlOptions};
use report_model::{ExportShape, ItemKind, Properties, PropertyValue, ReportItem};

/// Item elements sit under `Report/<Section>/ReportItems`
const ITEM_DEPTH: usize = 3;

pub(super) fn write_item(xml: &mut String, item: &ReportItem, options: &RdlOptions) {
    let Some(kind) = ItemKind::from_plugin_id(item.plugin_id()) else {
        tracing::debug!(id = item.id(), plugin = item.plugin_id(), "Skipping item with unknown plugin");
        return;
    };

    match kind.export_shape() {
        ExportShape::Textbox => write_textbox(xml, item),
        ExportShape::Image => write_image(xml, item),
        ExportShape::Table => write_table(xml, item, options),
        ExportShape::Placeholder => write_placeholder(xml, item, kind),
    }
}

fn write_textbox(xml: &mut String, item: &ReportItem) {
    let props = &item.properties;
    let d = ITEM_DEPTH;

    open_item(xml, "Textbox", item);
    let value = text(props, "text").or_else(|| text(props, "value")).unwrap_or_default();
    element(xml, d + 1, "Value", &escape(&value));

    line(xml, d + 1, "<Style>");
    let family = text(props, "fontFamily").unwrap_or_else(|| "Arial".into());
    element(xml, d + 2, "FontFamily", &escape(&family));
    let size = text(props, "fontSize").unwrap_or_else(|| "12".into());
    element(xml, d + 2, "FontSize", &format!("{}pt", escape(&size)));
    let weight = if props.str_opt("fontWeight") == Some("bold") { "Bold" } else { "Normal" };
    element(xml, d + 2, "FontWeight", weight);
    let style = if props.str_opt("fontStyle") == Some("italic") { "Italic" } else { "Normal" };
    element(xml, d + 2, "FontStyle", style);
    let align = capitalize_first(&text(props, "textAlign").unwrap_or_else(|| "left".into()));
    element(xml, d + 2, "TextAlign", &escape(&align));
    let color = text(props, "color")
        .or_else(|| text(props, "valueColor"))
        .unwrap_or_else(|| "#000000".into());
    element(xml, d + 2, "Color", &escape(&color));
    let background = match text(props, "backgroundColor") {
        Some(color) if color != "transparent" => color,
        _ => "Transparent".into(),
    };
    element(xml, d + 2, "BackgroundColor", &escape(&background));
    line(xml, d + 1, "</Style>");

    close_item(xml, "Textbox");
}

fn write_image(xml: &mut String, item: &ReportItem) {
    let props = &item.properties;
    let d = ITEM_DEPTH;

    open_item(xml, "Image", item);
    element(xml, d + 1, "Source", "External");
    let src = text(props, "src").unwrap_or_default();
    element(xml, d + 1, "Value", &escape(&src));
    let sizing = if props.str_opt("objectFit") == Some("cover") {
        "FitProportional"
    } else {
        "Fit"
    };
    element(xml, d + 1, "Sizing", sizing);
    close_item(xml, "Image");
}

/// Table skeleton: literal "Column N" headers over one "Data N" detail row
fn write_table(xml: &mut String, item: &ReportItem, options: &RdlOptions) {
    let props = &item.properties;
    let d = ITEM_DEPTH;
    let columns = props.number_or("columns", 3.0);
    let column_count = if columns > 0.0 { columns.floor() as usize } else { 0 };
    let column_width = format_number(props.number_or("width", 400.0) / columns);
    let header_color = text(props, "headerColor").unwrap_or_else(|| "#f0f0f0".into());

    open_item(xml, "Table", item);
    element(xml, d + 1, "DataSetName", &escape(&options.dataset_name));

    line(xml, d + 1, "<TableColumns>");
    for _ in 0..column_count {
        line(xml, d + 2, "<TableColumn>");
        element(xml, d + 3, "Width", &format!("{}pt", column_width));
        line(xml, d + 2, "</TableColumn>");
    }
    line(xml, d + 1, "</TableColumns>");

    line(xml, d + 1, "<Header>");
    write_table_row(xml, "25pt", column_count, |xml, n| {
        element(xml, d + 8, "Value", &format!("Column {}", n));
        line(xml, d + 8, "<Style>");
        element(xml, d + 9, "BackgroundColor", &escape(&header_color));
        element(xml, d + 9, "FontWeight", "Bold");
        line(xml, d + 8, "</Style>");
    });
    line(xml, d + 1, "</Header>");

    line(xml, d + 1, "<Details>");
    write_table_row(xml, "20pt", column_count, |xml, n| {
        element(xml, d + 8, "Value", &format!("Data {}", n));
    });
    line(xml, d + 1, "</Details>");

    close_item(xml, "Table");
}

/// One `TableRows` block holding a single row; `cell` writes each textbox body
fn write_table_row(
    xml: &mut String,
    height: &str,
    columns: usize,
    cell: impl Fn(&mut String, usize),
) {
    let d = ITEM_DEPTH;
    line(xml, d + 2, "<TableRows>");
    line(xml, d + 3, "<TableRow>");
    element(xml, d + 4, "Height", height);
    line(xml, d + 4, "<TableCells>");
    for n in 1..=columns {
        line(xml, d + 5, "<TableCell>");
        line(xml, d + 6, "<ReportItems>");
        line(xml, d + 7, "<Textbox>");
        cell(xml, n);
        line(xml, d + 7, "</Textbox>");
        line(xml, d + 6, "</ReportItems>");
        line(xml, d + 5, "</TableCell>");
    }
    line(xml, d + 4, "</TableCells>");
    line(xml, d + 3, "</TableRow>");
    line(xml, d + 2, "</TableRows>");
}

/// Bordered text box for matrix and QR code items
fn write_placeholder(xml: &mut String, item: &ReportItem, kind: ItemKind) {
    let d = ITEM_DEPTH;
    let value = match kind {
        ItemKind::QrCode => text(&item.properties, "value").unwrap_or_default(),
        _ => "Matrix".to_string(),
    };

    open_item(xml, "Textbox", item);
    element(xml, d + 1, "Value", &escape(&value));
    line(xml, d + 1, "<Style>");
    line(xml, d + 2, "<Border>");
    element(xml, d + 3, "Style", "Solid");
    line(xml, d + 2, "</Border>");
    line(xml, d + 1, "</Style>");
    close_item(xml, "Textbox");
}

/// Opening tag plus the shared geometry block
fn open_item(xml: &mut String, tag: &str, item: &ReportItem) {
    let d = ITEM_DEPTH;
    line(xml, d, &format!(r#"<{} Name="{}">"#, tag, escape(item.id())));
    element(xml, d + 1, "Top", &format!("{}in", inches(item.y)));
    element(xml, d + 1, "Left", &format!("{}in", inches(item.x)));
    element(xml, d + 1, "Width", &format!("{}in", inches(item.width())));
    element(xml, d + 1, "Height", &format!("{}in", inches(item.height())));
}

fn close_item(xml: &mut String, tag: &str) {
    line(xml, ITEM_DEPTH, &format!("</{}>", tag));
}

/// Text form of a property, or `None` when it is missing or unset
fn text(props: &Properties, name: &str) -> Option<String> {
    let value = props.get(name).filter(|value| value.is_set())?;
    Some(match value {
        PropertyValue::Number(n) => format_number(*n),
        PropertyValue::Boolean(b) => b.to_string(),
        PropertyValue::Other(v) => v.to_string(),
        other => other.as_str().unwrap_or_default().to_string(),
    })
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_model::{ItemCatalog, RegionName};

    fn render(item: &ReportItem) -> String {
        let mut xml = String::new();
        write_item(&mut xml, item, &RdlOptions::default());
        xml
    }

    fn placed(plugin_id: &str) -> ReportItem {
        let catalog = ItemCatalog::builtin();
        let entry = catalog.get(plugin_id).unwrap();
        ReportItem::new(format!("{}-1", plugin_id), plugin_id, RegionName::Body, 0.0, 0.0)
            .with_properties(entry.default_properties.clone())
    }

    #[test]
    fn test_unknown_plugin_emits_nothing() {
        let item = ReportItem::new("c1", "chart", RegionName::Body, 0.0, 0.0);
        assert_eq!(render(&item), "");
    }

    #[test]
    fn test_singlefield_uses_value_and_value_color() {
        let xml = render(&placed("singlefield"));
        assert!(xml.contains("<Value>customer.name</Value>"));
        assert!(xml.contains("<Color>#333333</Color>"));
        assert!(xml.contains("<BackgroundColor>Transparent</BackgroundColor>"));
        assert!(xml.contains("<TextAlign>Left</TextAlign>"));
    }

    #[test]
    fn test_text_preferred_over_value() {
        let mut item = placed("textbox");
        item.properties.insert("value", "ignored");
        item.properties.insert("fontStyle", PropertyValue::choice("italic"));
        item.properties.insert("backgroundColor", PropertyValue::color("#ffee00"));
        let xml = render(&item);
        assert!(xml.contains("<Value>Text</Value>"));
        assert!(xml.contains("<FontStyle>Italic</FontStyle>"));
        assert!(xml.contains("<BackgroundColor>#ffee00</BackgroundColor>"));
    }

    #[test]
    fn test_missing_geometry_defaults() {
        let item = ReportItem::new("t", "textbox", RegionName::Body, 0.0, 0.0);
        let xml = render(&item);
        assert!(xml.contains("<Width>1.389in</Width>"));
        assert!(xml.contains("<Height>0.417in</Height>"));
        assert!(xml.contains("<Value></Value>"));
        assert!(xml.contains("<FontSize>12pt</FontSize>"));
    }

    #[test]
    fn test_image() {
        let mut item = placed("image");
        item.properties.insert("src", "https://cdn.test/logo.png?a=1&b=2");
        let xml = render(&item);
        assert!(xml.contains("<Source>External</Source>"));
        assert!(xml.contains("<Value>https://cdn.test/logo.png?a=1&amp;b=2</Value>"));
        assert!(xml.contains("<Sizing>Fit</Sizing>"));

        item.properties.insert("objectFit", PropertyValue::choice("cover"));
        assert!(render(&item).contains("<Sizing>FitProportional</Sizing>"));
    }

    #[test]
    fn test_table_columns() {
        let mut item = placed("table");
        item.properties.insert("columns", 4.0);
        let xml = render(&item);
        assert_eq!(xml.matches("<TableColumn>").count(), 4);
        assert!(xml.contains("<Width>100pt</Width>"));
        assert!(xml.contains("<Value>Column 4</Value>"));
        assert!(xml.contains("<Value>Data 4</Value>"));
        assert!(!xml.contains("Column 5"));
        assert_eq!(xml.matches("<BackgroundColor>#f0f0f0</BackgroundColor>").count(), 4);
        assert!(xml.contains("<DataSetName>DataSet1</DataSetName>"));
    }

    #[test]
    fn test_table_cell_layout() {
        let mut item = placed("table");
        item.properties.insert("columns", 1.0);
        let xml = render(&item);
        let expected_header = "        <Header>
          <TableRows>
            <TableRow>
              <Height>25pt</Height>
              <TableCells>
                <TableCell>
                  <ReportItems>
                    <Textbox>
                      <Value>Column 1</Value>
                      <Style>
                        <BackgroundColor>#f0f0f0</BackgroundColor>
                        <FontWeight>Bold</FontWeight>
                      </Style>
                    </Textbox>
                  </ReportItems>
                </TableCell>
              </TableCells>
            </TableRow>
          </TableRows>
        </Header>
";
        assert!(xml.contains(expected_header));
        assert!(xml.contains("<Width>400pt</Width>"));
    }

    #[test]
    fn test_default_table_column_width() {
        let xml = render(&placed("table"));
        assert!(xml.contains("<Width>133.33333333333334pt</Width>"));
    }

    #[test]
    fn test_placeholders() {
        let qr = render(&placed("qrcode"));
        assert!(qr.contains("<Value>https://example.com</Value>"));
        assert!(qr.contains("<Border>\n            <Style>Solid</Style>\n          </Border>"));

        let matrix = render(&placed("matrix"));
        assert!(matrix.starts_with("      <Textbox Name=\"matrix-1\">"));
        assert!(matrix.contains("<Value>Matrix</Value>"));
    }

    #[test]
    fn test_name_attribute_escaped() {
        let item = ReportItem::new(r#"a"b<c"#, "image", RegionName::Body, 0.0, 0.0);
        assert!(render(&item).contains(r#"<Image Name="a&quot;b&lt;c">"#));
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("center"), "Center");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("Right"), "Right");
    }
}
