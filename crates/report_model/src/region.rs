//! Canvas regions (page header, body and page footer bands)

use crate::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest height a region may have, in points
pub const MIN_REGION_HEIGHT: f64 = 50.0;

/// The three fixed bands of a report page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionName {
    Header,
    Body,
    Footer,
}

impl RegionName {
    /// All regions in page order
    pub const ALL: [RegionName; 3] = [RegionName::Header, RegionName::Body, RegionName::Footer];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionName::Header => "header",
            RegionName::Body => "body",
            RegionName::Footer => "footer",
        }
    }

    fn index(&self) -> usize {
        match self {
            RegionName::Header => 0,
            RegionName::Body => 1,
            RegionName::Footer => 2,
        }
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RegionName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "header" => Ok(RegionName::Header),
            "body" => Ok(RegionName::Body),
            "footer" => Ok(RegionName::Footer),
            other => Err(ModelError::InvalidRegions(format!("unknown region '{}'", other))),
        }
    }
}

/// A single band of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasRegion {
    pub name: RegionName,
    /// Height in points
    pub height: f64,
}

impl CanvasRegion {
    pub fn new(name: RegionName, height: f64) -> Self {
        Self {
            name,
            height: clamp_height(height),
        }
    }
}

/// Clamp a requested region height to the minimum
pub fn clamp_height(height: f64) -> f64 {
    if !height.is_finite() {
        return MIN_REGION_HEIGHT;
    }
    height.max(MIN_REGION_HEIGHT)
}

/// Exactly one region per [`RegionName`], kept in page order.
///
/// Serialized as a plain array of `{ name, height }` objects. Deserializing
/// rejects arrays with a missing or duplicated region, and lifts heights
/// below the minimum up to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CanvasRegion>", into = "Vec<CanvasRegion>")]
pub struct RegionSet {
    regions: [CanvasRegion; 3],
}

impl RegionSet {
    pub fn new(header: f64, body: f64, footer: f64) -> Self {
        Self {
            regions: [
                CanvasRegion::new(RegionName::Header, header),
                CanvasRegion::new(RegionName::Body, body),
                CanvasRegion::new(RegionName::Footer, footer),
            ],
        }
    }

    pub fn get(&self, name: RegionName) -> &CanvasRegion {
        &self.regions[name.index()]
    }

    pub fn height(&self, name: RegionName) -> f64 {
        self.get(name).height
    }

    /// Set a region height, clamped to [`MIN_REGION_HEIGHT`]. Returns the stored height.
    pub fn set_height(&mut self, name: RegionName, height: f64) -> f64 {
        let clamped = clamp_height(height);
        self.regions[name.index()].height = clamped;
        clamped
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanvasRegion> {
        self.regions.iter()
    }
}

impl Default for RegionSet {
    fn default() -> Self {
        Self::new(100.0, 500.0, 80.0)
    }
}

impl TryFrom<Vec<CanvasRegion>> for RegionSet {
    type Error = ModelError;

    fn try_from(list: Vec<CanvasRegion>) -> Result<Self> {
        let mut slots: [Option<CanvasRegion>; 3] = [None, None, None];

        for region in list {
            let slot = &mut slots[region.name.index()];
            if slot.is_some() {
                return Err(ModelError::InvalidRegions(format!(
                    "duplicate region '{}'",
                    region.name
                )));
            }
            if region.height.is_nan() || region.height < MIN_REGION_HEIGHT {
                tracing::warn!(
                    "Region '{}' height {} below minimum, clamping to {}",
                    region.name,
                    region.height,
                    MIN_REGION_HEIGHT
                );
            }
            *slot = Some(CanvasRegion::new(region.name, region.height));
        }

        let mut regions = [CanvasRegion::new(RegionName::Header, MIN_REGION_HEIGHT); 3];
        for name in RegionName::ALL {
            regions[name.index()] = slots[name.index()].ok_or_else(|| {
                ModelError::InvalidRegions(format!("missing region '{}'", name))
            })?;
        }

        Ok(Self { regions })
    }
}

impl From<RegionSet> for Vec<CanvasRegion> {
    fn from(set: RegionSet) -> Self {
        set.regions.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_heights() {
        let regions = RegionSet::default();
        assert_eq!(regions.height(RegionName::Header), 100.0);
        assert_eq!(regions.height(RegionName::Body), 500.0);
        assert_eq!(regions.height(RegionName::Footer), 80.0);
    }

    #[test]
    fn test_set_height_clamps() {
        let mut regions = RegionSet::default();
        assert_eq!(regions.set_height(RegionName::Header, 10.0), 50.0);
        assert_eq!(regions.height(RegionName::Header), 50.0);
        assert_eq!(regions.set_height(RegionName::Footer, 120.5), 120.5);
        assert_eq!(regions.set_height(RegionName::Body, f64::NAN), 50.0);
    }

    #[test]
    fn test_serializes_as_ordered_array() {
        let json = serde_json::to_value(RegionSet::default()).unwrap();
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["header", "body", "footer"]);
    }

    #[test]
    fn test_deserialize_any_order() {
        let json = r#"[
            {"name": "footer", "height": 60},
            {"name": "header", "height": 70},
            {"name": "body", "height": 400}
        ]"#;
        let regions: RegionSet = serde_json::from_str(json).unwrap();
        assert_eq!(regions.height(RegionName::Header), 70.0);
        assert_eq!(regions.height(RegionName::Footer), 60.0);
        assert_eq!(regions.iter().next().unwrap().name, RegionName::Header);
    }

    #[test]
    fn test_deserialize_rejects_missing_region() {
        let json = r#"[{"name": "header", "height": 70}, {"name": "body", "height": 400}]"#;
        let err = serde_json::from_str::<RegionSet>(json).unwrap_err();
        assert!(err.to_string().contains("missing region 'footer'"));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_region() {
        let json = r#"[
            {"name": "header", "height": 70},
            {"name": "header", "height": 90},
            {"name": "body", "height": 400},
            {"name": "footer", "height": 60}
        ]"#;
        assert!(serde_json::from_str::<RegionSet>(json).is_err());
    }

    #[test]
    fn test_deserialize_clamps_low_height() {
        let json = r#"[
            {"name": "header", "height": 5},
            {"name": "body", "height": 400},
            {"name": "footer", "height": 60}
        ]"#;
        let regions: RegionSet = serde_json::from_str(json).unwrap();
        assert_eq!(regions.height(RegionName::Header), 50.0);
    }

    #[test]
    fn test_region_name_from_str() {
        assert_eq!("body".parse::<RegionName>().unwrap(), RegionName::Body);
        assert!("sidebar".parse::<RegionName>().is_err());
    }
}
