//! Report-level properties: title, author, paper and margins

use serde::{Deserialize, Serialize};

/// Supported paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    Letter,
}

impl PaperSize {
    /// Page size in points for the given orientation, as `(width, height)`
    pub fn dimensions_pt(&self, orientation: Orientation) -> (f64, f64) {
        let (w, h) = match self {
            PaperSize::A4 => (595.0, 842.0),
            PaperSize::Letter => (612.0, 792.0),
        };
        orientation.orient(w, h)
    }

    /// Page size in inches for the given orientation, as `(width, height)`
    pub fn dimensions_in(&self, orientation: Orientation) -> (f64, f64) {
        let (w, h) = match self {
            PaperSize::A4 => (8.27, 11.69),
            PaperSize::Letter => (8.5, 11.0),
        };
        orientation.orient(w, h)
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    fn orient(&self, short: f64, long: f64) -> (f64, f64) {
        match self {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }
}

/// Page margins in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn uniform(points: f64) -> Self {
        Self {
            top: points,
            right: points,
            bottom: points,
            left: points,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(36.0)
    }
}

/// Properties of the report as a whole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportProperties {
    pub title: String,
    pub author: String,
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub margins: Margins,
}

impl Default for ReportProperties {
    fn default() -> Self {
        Self {
            title: "New Report".to_string(),
            author: "Report Designer".to_string(),
            paper_size: PaperSize::Letter,
            orientation: Orientation::Portrait,
            margins: Margins::default(),
        }
    }
}

impl ReportProperties {
    /// Shallow merge: every field present in the patch replaces the current one
    pub fn apply(&mut self, patch: ReportPropertiesPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(paper_size) = patch.paper_size {
            self.paper_size = paper_size;
        }
        if let Some(orientation) = patch.orientation {
            self.orientation = orientation;
        }
        if let Some(margins) = patch.margins {
            self.margins = margins;
        }
    }

    /// Page size in points for the current paper and orientation
    pub fn page_size_pt(&self) -> (f64, f64) {
        self.paper_size.dimensions_pt(self.orientation)
    }
}

/// Partial update of [`ReportProperties`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportPropertiesPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub paper_size: Option<PaperSize>,
    pub orientation: Option<Orientation>,
    pub margins: Option<Margins>,
}

impl ReportPropertiesPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn paper_size(mut self, paper_size: PaperSize) -> Self {
        self.paper_size = Some(paper_size);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }
}
