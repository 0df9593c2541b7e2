//! Report Model - Report template structure and item catalog
//!
//! This crate provides the in-memory model of a report template: report
//! properties, the three canvas regions, the placed items with their open
//! property maps, and the catalog of item types those items come from.

mod catalog;
mod document;
mod error;
mod item;
mod item_kind;
mod properties;
mod region;
mod report;

pub use catalog::*;
pub use document::*;
pub use error::*;
pub use item::*;
pub use item_kind::*;
pub use properties::*;
pub use region::*;
pub use report::*;
