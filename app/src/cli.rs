//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use edit_engine::{Alignment, DistributeDirection};

#[derive(Parser)]
#[command(
    name = "report-designer",
    version,
    about = "Design report templates and export them as report definitions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level used when RUST_LOG is not set.
    #[arg(long = "log-level", value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevelArg,

    /// Settings file (default: settings.json in the current directory).
    #[arg(long = "settings", value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// Plugin-config JSON to use instead of the built-in item catalog.
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a new template.
    New {
        /// Start from the sample invoice instead of an empty report.
        #[arg(long)]
        sample: bool,

        /// Where to write the template.
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Load a template and report what it contains.
    Validate {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,
    },

    /// Export a template as a report definition.
    Export {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        /// Output file (default: <title>.rdl next to the template).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the available item types.
    Catalog {
        /// Print the catalog as plugin-config JSON.
        #[arg(long)]
        json: bool,
    },

    /// Align items in a template.
    Align {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        /// Edge or axis to align on.
        #[arg(long, value_enum)]
        edge: EdgeArg,

        /// Comma-separated ids of the items to align.
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,

        /// Output file (default: overwrite the template).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Space items in a template evenly.
    Distribute {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        #[arg(long, value_enum)]
        direction: DirectionArg,

        /// Comma-separated ids of the items to distribute.
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,

        /// Output file (default: overwrite the template).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevelArg::Error => "error",
            LogLevelArg::Warn => "warn",
            LogLevelArg::Info => "info",
            LogLevelArg::Debug => "debug",
            LogLevelArg::Trace => "trace",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EdgeArg {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl From<EdgeArg> for Alignment {
    fn from(edge: EdgeArg) -> Self {
        match edge {
            EdgeArg::Left => Alignment::Left,
            EdgeArg::Center => Alignment::Center,
            EdgeArg::Right => Alignment::Right,
            EdgeArg::Top => Alignment::Top,
            EdgeArg::Middle => Alignment::Middle,
            EdgeArg::Bottom => Alignment::Bottom,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Horizontal,
    Vertical,
}

impl From<DirectionArg> for DistributeDirection {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Horizontal => DistributeDirection::Horizontal,
            DirectionArg::Vertical => DistributeDirection::Vertical,
        }
    }
}
