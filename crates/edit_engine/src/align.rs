//! Alignment and distribution of the selected items
//!
//! Geometry uses each item's `width`/`height` property, falling back to
//! 100 x 30 points when unset.

use crate::{Command, CommandOutcome, Result};
use report_model::{Document, ReportItem};
use serde::{Deserialize, Serialize};

/// Edge or axis to align the selection on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl std::str::FromStr for Alignment {
    type Err = crate::EditError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            "top" => Ok(Alignment::Top),
            "middle" => Ok(Alignment::Middle),
            "bottom" => Ok(Alignment::Bottom),
            other => Err(crate::EditError::InvalidCommand(format!("unknown alignment '{}'", other))),
        }
    }
}

/// Axis to distribute the selection along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributeDirection {
    Horizontal,
    Vertical,
}

impl std::str::FromStr for DistributeDirection {
    type Err = crate::EditError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "horizontal" => Ok(DistributeDirection::Horizontal),
            "vertical" => Ok(DistributeDirection::Vertical),
            other => Err(crate::EditError::InvalidCommand(format!("unknown direction '{}'", other))),
        }
    }
}

/// Minimum selection size for [`align_items`]
pub const MIN_ALIGN_SELECTION: usize = 2;
/// Minimum selection size for [`distribute_items`]
pub const MIN_DISTRIBUTE_SELECTION: usize = 3;

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn pos(self, item: &ReportItem) -> f64 {
        match self {
            Axis::X => item.x,
            Axis::Y => item.y,
        }
    }

    fn size(self, item: &ReportItem) -> f64 {
        match self {
            Axis::X => item.width(),
            Axis::Y => item.height(),
        }
    }

    fn set_pos(self, item: &mut ReportItem, value: f64) {
        match self {
            Axis::X => item.x = value,
            Axis::Y => item.y = value,
        }
    }
}

/// Align the selected items. Returns `None` with fewer than two selected.
///
/// `Center` and `Middle` move every item so its midpoint sits on the mean of
/// all selected midpoints.
pub fn align_items(document: &Document, alignment: Alignment) -> Option<Document> {
    let selected: Vec<&ReportItem> = document.selected_items().collect();
    if selected.len() < MIN_ALIGN_SELECTION {
        return None;
    }

    let axis = match alignment {
        Alignment::Left | Alignment::Center | Alignment::Right => Axis::X,
        Alignment::Top | Alignment::Middle | Alignment::Bottom => Axis::Y,
    };

    // Maps an item to its new leading coordinate
    let target: Box<dyn Fn(&ReportItem) -> f64> = match alignment {
        Alignment::Left | Alignment::Top => {
            let min = selected
                .iter()
                .map(|item| axis.pos(item))
                .fold(f64::INFINITY, f64::min);
            Box::new(move |_: &ReportItem| min)
        }
        Alignment::Right | Alignment::Bottom => {
            let max = selected
                .iter()
                .map(|item| axis.pos(item) + axis.size(item))
                .fold(f64::NEG_INFINITY, f64::max);
            Box::new(move |item: &ReportItem| max - axis.size(item))
        }
        Alignment::Center | Alignment::Middle => {
            let sum: f64 = selected
                .iter()
                .map(|item| axis.pos(item) + axis.size(item) / 2.0)
                .sum();
            let mean = sum / selected.len() as f64;
            Box::new(move |item: &ReportItem| mean - axis.size(item) / 2.0)
        }
    };

    let mut doc = document.clone();
    for item in doc.items.iter_mut().filter(|item| item.selected) {
        let value = target(&*item);
        axis.set_pos(item, value);
    }
    Some(doc)
}

/// Space the selected items evenly. Returns `None` with fewer than three selected.
///
/// Items are ordered by position; the first stays put and each following
/// item starts one equal gap after the previous item's trailing edge.
pub fn distribute_items(document: &Document, direction: DistributeDirection) -> Option<Document> {
    let axis = match direction {
        DistributeDirection::Horizontal => Axis::X,
        DistributeDirection::Vertical => Axis::Y,
    };

    let mut order: Vec<usize> = document
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.selected)
        .map(|(index, _)| index)
        .collect();
    if order.len() < MIN_DISTRIBUTE_SELECTION {
        return None;
    }
    order.sort_by(|&a, &b| axis.pos(&document.items[a]).total_cmp(&axis.pos(&document.items[b])));

    let first = &document.items[order[0]];
    let last = &document.items[order[order.len() - 1]];
    let total_space = axis.pos(last) + axis.size(last) - axis.pos(first);
    let total_item_size: f64 = order.iter().map(|&i| axis.size(&document.items[i])).sum();
    let spacing = (total_space - total_item_size) / (order.len() - 1) as f64;

    let mut doc = document.clone();
    let mut cursor = axis.pos(first);
    for (n, &index) in order.iter().enumerate() {
        if n > 0 {
            let previous = &document.items[order[n - 1]];
            cursor += axis.size(previous) + spacing;
        }
        axis.set_pos(&mut doc.items[index], cursor);
    }
    Some(doc)
}

/// Align the current selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignItems {
    pub alignment: Alignment,
}

impl AlignItems {
    pub fn new(alignment: Alignment) -> Self {
        Self { alignment }
    }
}

impl Command for AlignItems {
    fn apply(&self, document: &Document) -> Result<CommandOutcome> {
        Ok(match align_items(document, self.alignment) {
            Some(doc) => CommandOutcome::Applied(doc),
            None => CommandOutcome::Unchanged,
        })
    }

    fn undoable(&self) -> bool {
        true
    }

    fn display_name(&self) -> &str {
        "Align"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

/// Distribute the current selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributeItems {
    pub direction: DistributeDirection,
}

impl DistributeItems {
    pub fn new(direction: DistributeDirection) -> Self {
        Self { direction }
    }
}

impl Command for DistributeItems {
    fn apply(&self, document: &Document) -> Result<CommandOutcome> {
        Ok(match distribute_items(document, self.direction) {
            Some(doc) => CommandOutcome::Applied(doc),
            None => CommandOutcome::Unchanged,
        })
    }

    fn undoable(&self) -> bool {
        true
    }

    fn display_name(&self) -> &str {
        "Distribute"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_model::{Properties, RegionName};

    /// Document with one selected item per `(x, y, width, height)`
    fn selected_doc(boxes: &[(f64, f64, f64, f64)]) -> Document {
        let mut doc = Document::new();
        for (i, &(x, y, w, h)) in boxes.iter().enumerate() {
            let mut item = ReportItem::new(format!("item-{}", i), "textbox", RegionName::Body, x, y)
                .with_properties(Properties::new().with("width", w).with("height", h));
            item.selected = true;
            doc.items.push(item);
        }
        doc
    }

    fn xs(doc: &Document) -> Vec<f64> {
        doc.items.iter().map(|item| item.x).collect()
    }

    fn ys(doc: &Document) -> Vec<f64> {
        doc.items.iter().map(|item| item.y).collect()
    }

    #[test]
    fn test_align_left() {
        let doc = selected_doc(&[(10.0, 0.0, 80.0, 30.0), (50.0, 5.0, 20.0, 30.0), (30.0, 9.0, 100.0, 30.0)]);
        let aligned = align_items(&doc, Alignment::Left).unwrap();
        assert_eq!(xs(&aligned), vec![10.0, 10.0, 10.0]);
        assert_eq!(ys(&aligned), vec![0.0, 5.0, 9.0]);
    }

    #[test]
    fn test_align_center_uses_mean_of_midpoints() {
        let doc = selected_doc(&[(0.0, 0.0, 100.0, 30.0), (200.0, 0.0, 100.0, 30.0)]);
        let aligned = align_items(&doc, Alignment::Center).unwrap();
        assert_eq!(xs(&aligned), vec![100.0, 100.0]);
    }

    #[test]
    fn test_align_center_mixed_widths() {
        // Midpoints 50 and 120, mean 85
        let doc = selected_doc(&[(0.0, 0.0, 100.0, 30.0), (100.0, 0.0, 40.0, 30.0)]);
        let aligned = align_items(&doc, Alignment::Center).unwrap();
        assert_eq!(xs(&aligned), vec![35.0, 65.0]);
    }

    #[test]
    fn test_align_right_and_bottom() {
        let doc = selected_doc(&[(0.0, 0.0, 100.0, 30.0), (20.0, 50.0, 40.0, 10.0)]);
        let right = align_items(&doc, Alignment::Right).unwrap();
        assert_eq!(xs(&right), vec![0.0, 60.0]);

        let bottom = align_items(&doc, Alignment::Bottom).unwrap();
        assert_eq!(ys(&bottom), vec![30.0, 50.0]);
    }

    #[test]
    fn test_align_top_and_middle() {
        let doc = selected_doc(&[(0.0, 40.0, 100.0, 20.0), (0.0, 10.0, 100.0, 40.0)]);
        let top = align_items(&doc, Alignment::Top).unwrap();
        assert_eq!(ys(&top), vec![10.0, 10.0]);

        // Midpoints 50 and 30, mean 40
        let middle = align_items(&doc, Alignment::Middle).unwrap();
        assert_eq!(ys(&middle), vec![30.0, 20.0]);
    }

    #[test]
    fn test_align_uses_default_size() {
        let mut doc = Document::new();
        for (i, x) in [0.0, 50.0].into_iter().enumerate() {
            let mut item = ReportItem::new(format!("i{}", i), "textbox", RegionName::Body, x, 0.0);
            item.selected = true;
            doc.items.push(item);
        }
        let right = align_items(&doc, Alignment::Right).unwrap();
        assert_eq!(xs(&right), vec![50.0, 50.0]);
    }

    #[test]
    fn test_align_ignores_unselected() {
        let mut doc = selected_doc(&[(10.0, 0.0, 50.0, 30.0), (40.0, 0.0, 50.0, 30.0), (0.0, 0.0, 50.0, 30.0)]);
        doc.items[2].selected = false;
        let aligned = align_items(&doc, Alignment::Left).unwrap();
        assert_eq!(xs(&aligned), vec![10.0, 10.0, 0.0]);
    }

    #[test]
    fn test_align_needs_two() {
        let doc = selected_doc(&[(10.0, 0.0, 50.0, 30.0)]);
        assert!(align_items(&doc, Alignment::Left).is_none());
        assert_eq!(AlignItems::new(Alignment::Left).apply(&doc).unwrap(), CommandOutcome::Unchanged);
    }

    #[test]
    fn test_distribute_horizontal() {
        let doc = selected_doc(&[(0.0, 0.0, 100.0, 30.0), (100.0, 0.0, 100.0, 30.0), (400.0, 0.0, 100.0, 30.0)]);
        let spread = distribute_items(&doc, DistributeDirection::Horizontal).unwrap();
        assert_eq!(xs(&spread), vec![0.0, 200.0, 400.0]);
    }

    #[test]
    fn test_distribute_sorts_by_position() {
        // Stored out of order; the item at x=300 is the middle one
        let doc = selected_doc(&[(600.0, 0.0, 50.0, 30.0), (0.0, 0.0, 100.0, 30.0), (300.0, 0.0, 50.0, 30.0)]);
        // total 650, sizes 200, spacing 225
        let spread = distribute_items(&doc, DistributeDirection::Horizontal).unwrap();
        assert_eq!(xs(&spread), vec![600.0, 0.0, 325.0]);
    }

    #[test]
    fn test_distribute_vertical_equal_gaps() {
        let doc = selected_doc(&[
            (0.0, 0.0, 100.0, 20.0),
            (0.0, 25.0, 100.0, 40.0),
            (0.0, 30.0, 100.0, 10.0),
            (0.0, 150.0, 100.0, 30.0),
        ]);
        // total 180, sizes 100, spacing 80/3
        let spread = distribute_items(&doc, DistributeDirection::Vertical).unwrap();
        let y = ys(&spread);
        let gap = 80.0 / 3.0;
        assert_eq!(y[0], 0.0);
        assert!((y[1] - (20.0 + gap)).abs() < 1e-9);
        assert!((y[2] - (60.0 + 2.0 * gap)).abs() < 1e-9);
        assert!((y[3] - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribute_needs_three() {
        let doc = selected_doc(&[(0.0, 0.0, 100.0, 30.0), (300.0, 0.0, 100.0, 30.0)]);
        assert!(distribute_items(&doc, DistributeDirection::Horizontal).is_none());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("middle".parse::<Alignment>().unwrap(), Alignment::Middle);
        assert!("diagonal".parse::<Alignment>().is_err());
        assert_eq!("vertical".parse::<DistributeDirection>().unwrap(), DistributeDirection::Vertical);
    }
}
