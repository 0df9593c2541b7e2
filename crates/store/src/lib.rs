//! Store - Template persistence, report definition export, and settings
//!
//! This crate handles template serialization, async and sync file
//! operations, RDL export, the built-in sample template, and designer
//! settings.

mod error;
mod file_io;
mod format;
pub mod rdl;
mod sample;
mod serializer;
mod settings;

pub use error::*;
pub use file_io::*;
pub use format::*;
pub use rdl::{export_rdl, RdlOptions, RdlWriter};
pub use sample::*;
pub use serializer::*;
pub use settings::*;
