// crates/chart/src/lib.rs
//! Loading project activity data and rendering it as a Markdown bar chart.
//!
//! The pipeline is [`load_projects`] to read the input document,
//! [`render_report`] to turn the records into Markdown, and an
//! [`OutputSink`] to deliver the text.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

mod bar;
mod config;
mod loader;
mod report;
mod sink;

pub use bar::{DEFAULT_FRACTIONAL_BLOCKS, FULL_BLOCK, Palette, generate_bar};
pub use config::{
    ChartConfig, ChartConfigBuilder, DEFAULT_INPUT, DEFAULT_MAX_BAR_WIDTH, DEFAULT_SCALE,
};
pub use loader::{ProjectRecord, load_projects, parse_projects};
pub use report::{render_report, sort_records};
pub use sink::OutputSink;

/// Error type for chart operations.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("file not found at '{}'", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("could not read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not decode JSON from '{}': {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no projects found in the JSON data")]
    EmptyProjectSet,
    #[error("error writing to file '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing to stdout: {0}")]
    Stdout(#[source] io::Error),
}

/// Result type for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;
