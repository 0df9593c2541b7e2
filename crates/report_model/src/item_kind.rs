//! Built-in item kinds
//!
//! Each kind ties a plugin id to its display data, default properties and
//! editable-property schema. Export dispatch matches on the same enum, so a
//! kind known to the catalog is always known to the exporter.

use crate::{Properties, PropertyKind, PropertyType, PropertyValue};
use std::fmt;

/// Element an item becomes in a report definition export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportShape {
    /// Styled text box carrying the item's text or bound value
    Textbox,
    /// External image reference
    Image,
    /// Table skeleton with a header row and one detail row
    Table,
    /// Bordered text box standing in for content the format cannot express
    Placeholder,
}

/// The item types the designer ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    TextBox,
    SingleField,
    Table,
    Image,
    Matrix,
    QrCode,
}

const FONT_FAMILIES: &[&str] = &["Arial", "Helvetica", "Times New Roman", "Courier New", "Verdana"];

impl ItemKind {
    pub const ALL: [ItemKind; 6] = [
        ItemKind::TextBox,
        ItemKind::SingleField,
        ItemKind::Table,
        ItemKind::Image,
        ItemKind::Matrix,
        ItemKind::QrCode,
    ];

    /// Plugin id used in templates
    pub fn id(&self) -> &'static str {
        match self {
            ItemKind::TextBox => "textbox",
            ItemKind::SingleField => "singlefield",
            ItemKind::Table => "table",
            ItemKind::Image => "image",
            ItemKind::Matrix => "matrix",
            ItemKind::QrCode => "qrcode",
        }
    }

    pub fn from_plugin_id(plugin_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == plugin_id)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ItemKind::TextBox => "Text Box",
            ItemKind::SingleField => "Single Field",
            ItemKind::Table => "Table",
            ItemKind::Image => "Image",
            ItemKind::Matrix => "Matrix",
            ItemKind::QrCode => "QR Code",
        }
    }

    pub fn export_shape(&self) -> ExportShape {
        match self {
            ItemKind::TextBox | ItemKind::SingleField => ExportShape::Textbox,
            ItemKind::Image => ExportShape::Image,
            ItemKind::Table => ExportShape::Table,
            ItemKind::Matrix | ItemKind::QrCode => ExportShape::Placeholder,
        }
    }

    /// Toolbox icon name
    pub fn icon(&self) -> &'static str {
        match self {
            ItemKind::TextBox => "Type",
            ItemKind::SingleField => "TextCursorInput",
            ItemKind::Table => "Table",
            ItemKind::Image => "Image",
            ItemKind::Matrix => "Grid3x3",
            ItemKind::QrCode => "QrCode",
        }
    }

    /// Properties a freshly placed item starts with
    pub fn default_properties(&self) -> Properties {
        match self {
            ItemKind::TextBox => Properties::new()
                .with("text", "Text")
                .with("width", 150.0)
                .with("height", 30.0)
                .with("fontSize", 12.0)
                .with("fontFamily", PropertyValue::choice("Arial"))
                .with("fontWeight", PropertyValue::choice("normal"))
                .with("fontStyle", PropertyValue::choice("normal"))
                .with("textAlign", PropertyValue::choice("left"))
                .with("color", PropertyValue::color("#000000"))
                .with("backgroundColor", PropertyValue::color("transparent"))
                .with("padding", 5.0),
            ItemKind::SingleField => Properties::new()
                .with("label", "Label:")
                .with("value", PropertyValue::data_field("customer.name"))
                .with("width", 200.0)
                .with("height", 30.0)
                .with("labelWidth", 80.0)
                .with("fontSize", 12.0)
                .with("fontFamily", PropertyValue::choice("Arial"))
                .with("fontWeight", PropertyValue::choice("normal"))
                .with("labelColor", PropertyValue::color("#000000"))
                .with("valueColor", PropertyValue::color("#333333")),
            ItemKind::Table => Properties::new()
                .with("columns", 3.0)
                .with("rows", 3.0)
                .with("headerRow", true)
                .with("width", 400.0)
                .with("height", 150.0)
                .with("fontSize", 11.0)
                .with("fontFamily", PropertyValue::choice("Arial"))
                .with("textColor", PropertyValue::color("#000000"))
                .with("headerColor", PropertyValue::color("#f0f0f0"))
                .with("borderColor", PropertyValue::color("#cccccc"))
                .with("cellPadding", 5.0),
            ItemKind::Image => Properties::new()
                .with("src", "")
                .with("alt", "Image")
                .with("width", 200.0)
                .with("height", 150.0)
                .with("objectFit", PropertyValue::choice("contain")),
            ItemKind::Matrix => Properties::new()
                .with("rowGroups", 2.0)
                .with("columnGroups", 2.0)
                .with("width", 400.0)
                .with("height", 200.0)
                .with("fontSize", 11.0)
                .with("fontFamily", PropertyValue::choice("Arial"))
                .with("textColor", PropertyValue::color("#000000"))
                .with("borderColor", PropertyValue::color("#cccccc")),
            ItemKind::QrCode => Properties::new()
                .with("value", "https://example.com")
                .with("size", 150.0)
                .with("width", 150.0)
                .with("height", 150.0)
                .with("fgColor", PropertyValue::color("#000000"))
                .with("bgColor", PropertyValue::color("#ffffff")),
        }
    }

    /// Editable-property schema, in panel order
    pub fn property_types(&self) -> Vec<(&'static str, PropertyType)> {
        let size = |max: f64| {
            [
                ("width", PropertyType::number("Width", 10.0, max)),
                ("height", PropertyType::number("Height", 10.0, max)),
            ]
        };
        let font = [
            ("fontSize", PropertyType::number("Font Size", 6.0, 72.0)),
            ("fontFamily", PropertyType::select("Font Family", FONT_FAMILIES)),
        ];

        let mut schema: Vec<(&'static str, PropertyType)> = match self {
            ItemKind::TextBox => vec![
                ("text", PropertyType::new(PropertyKind::Text, "Text")),
                ("fontWeight", PropertyType::select("Font Weight", &["normal", "bold"])),
                ("fontStyle", PropertyType::select("Font Style", &["normal", "italic"])),
                ("textAlign", PropertyType::select("Text Align", &["left", "center", "right"])),
                ("color", PropertyType::new(PropertyKind::Color, "Text Color")),
                ("backgroundColor", PropertyType::new(PropertyKind::Color, "Background")),
                ("padding", PropertyType::number("Padding", 0.0, 50.0)),
            ],
            ItemKind::SingleField => vec![
                ("label", PropertyType::new(PropertyKind::Text, "Label")),
                ("value", PropertyType::new(PropertyKind::DataField, "Data Field")),
                ("labelWidth", PropertyType::number("Label Width", 0.0, 400.0)),
                ("fontWeight", PropertyType::select("Font Weight", &["normal", "bold"])),
                ("labelColor", PropertyType::new(PropertyKind::Color, "Label Color")),
                ("valueColor", PropertyType::new(PropertyKind::Color, "Value Color")),
            ],
            ItemKind::Table => vec![
                ("columns", PropertyType::number("Columns", 1.0, 20.0)),
                ("rows", PropertyType::number("Rows", 1.0, 50.0)),
                ("headerRow", PropertyType::new(PropertyKind::Boolean, "Header Row")),
                ("textColor", PropertyType::new(PropertyKind::Color, "Text Color")),
                ("headerColor", PropertyType::new(PropertyKind::Color, "Header Color")),
                ("borderColor", PropertyType::new(PropertyKind::Color, "Border Color")),
                ("cellPadding", PropertyType::number("Cell Padding", 0.0, 20.0)),
            ],
            ItemKind::Image => vec![
                ("src", PropertyType::new(PropertyKind::Text, "Image URL")),
                ("alt", PropertyType::new(PropertyKind::Text, "Alt Text")),
                ("objectFit", PropertyType::select("Fit", &["contain", "cover", "fill"])),
            ],
            ItemKind::Matrix => vec![
                ("rowGroups", PropertyType::number("Row Groups", 1.0, 10.0)),
                ("columnGroups", PropertyType::number("Column Groups", 1.0, 10.0)),
                ("textColor", PropertyType::new(PropertyKind::Color, "Text Color")),
                ("borderColor", PropertyType::new(PropertyKind::Color, "Border Color")),
            ],
            ItemKind::QrCode => vec![
                ("value", PropertyType::new(PropertyKind::Text, "Value")),
                ("size", PropertyType::number("Size", 50.0, 500.0)),
                ("fgColor", PropertyType::new(PropertyKind::Color, "Foreground")),
                ("bgColor", PropertyType::new(PropertyKind::Color, "Background")),
            ],
        };

        match self {
            ItemKind::TextBox | ItemKind::SingleField | ItemKind::Table | ItemKind::Matrix => {
                schema.extend(font);
                schema.extend(size(800.0));
            }
            ItemKind::Image | ItemKind::QrCode => schema.extend(size(800.0)),
        }
        schema
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
