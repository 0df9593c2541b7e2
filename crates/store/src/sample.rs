//! Built-in sample template

use report_model::{
    Document, ItemKind, Properties, PropertyValue, RegionName, ReportItem,
};

/// A small invoice layout touching every built-in item type
pub fn sample_template() -> Document {
    let mut doc = Document::new();
    doc.report_properties.title = "Sample Invoice".to_string();

    doc.items = vec![
        item(ItemKind::TextBox, "title", RegionName::Header, 36.0, 20.0)
            .with_overrides(
                Properties::new()
                    .with("text", "INVOICE")
                    .with("fontSize", 24.0)
                    .with("fontWeight", PropertyValue::choice("bold"))
                    .with("width", 250.0)
                    .with("height", 40.0),
            ),
        item(ItemKind::Image, "logo", RegionName::Header, 420.0, 10.0).with_overrides(
            Properties::new()
                .with("alt", "Company logo")
                .with("width", 120.0)
                .with("height", 60.0),
        ),
        item(ItemKind::SingleField, "customer", RegionName::Body, 36.0, 20.0),
        item(ItemKind::SingleField, "invoice-date", RegionName::Body, 36.0, 60.0).with_overrides(
            Properties::new()
                .with("label", "Date:")
                .with("value", PropertyValue::data_field("invoice.date")),
        ),
        item(ItemKind::Table, "lines", RegionName::Body, 36.0, 110.0).with_overrides(
            Properties::new().with("columns", 4.0).with("width", 480.0),
        ),
        item(ItemKind::Matrix, "totals", RegionName::Body, 36.0, 280.0),
        item(ItemKind::TextBox, "thanks", RegionName::Footer, 36.0, 25.0).with_overrides(
            Properties::new()
                .with("text", "Thank you for your business")
                .with("fontStyle", PropertyValue::choice("italic"))
                .with("width", 300.0),
        ),
        item(ItemKind::QrCode, "payment-link", RegionName::Footer, 480.0, 5.0).with_overrides(
            Properties::new()
                .with("value", "https://example.com/pay")
                .with("size", 70.0)
                .with("width", 70.0)
                .with("height", 70.0),
        ),
    ];
    doc
}

fn item(kind: ItemKind, name: &str, region: RegionName, x: f64, y: f64) -> ReportItem {
    ReportItem::new(format!("{}-{}", kind.id(), name), kind.id(), region, x, y)
        .with_properties(kind.default_properties())
}

trait WithOverrides {
    fn with_overrides(self, overrides: Properties) -> Self;
}

impl WithOverrides for ReportItem {
    fn with_overrides(mut self, overrides: Properties) -> Self {
        self.properties.merge(overrides);
        self
    }
}
