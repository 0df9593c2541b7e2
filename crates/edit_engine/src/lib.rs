//! Edit Engine - Commands, selection, alignment and undo/redo
//!
//! Every change to a report document is a [`Command`] run through the
//! [`DesignerEngine`]. Undoable commands record a full snapshot of the
//! document's items and regions in a linear [`History`].

mod align;
mod command;
mod error;
mod executor;
mod history;
mod item_commands;
mod selection_commands;
mod shortcuts;

pub use align::*;
pub use command::*;
pub use error::*;
pub use executor::*;
pub use history::*;
pub use item_commands::*;
pub use selection_commands::*;
pub use shortcuts::*;
