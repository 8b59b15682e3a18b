// src/lib.rs
use std::io;

use chart::{ChartConfig, ChartError, OutputSink};

mod config;
mod run;

pub use chart::{Palette, ProjectRecord};
pub use config::{RunConfig, RunConfigBuilder};
pub use run::generate_with_config;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("could not set up logging: {0}")]
    Logging(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn exit_code(&self) -> activity_chart_cli::ExitCode {
        match self {
            Error::Chart(err) => activity_chart_cli::exit_code_for(err),
            Error::Logging(_) => activity_chart_cli::ExitCode::FileIo,
        }
    }
}

/// Loads the projects named by `cfg`, renders the Markdown chart and delivers
/// it to the configured sink.
///
/// Nothing is written when loading fails, so a bad input never leaves a
/// partial chart behind.
///
/// # Errors
///
/// Returns the loader's error for a missing, unreadable or malformed input
/// file and [`ChartError::OutputWrite`] when the output file cannot be
/// written.
///
/// # Examples
///
/// ```
/// use std::fs;
/// use activity_chart::generate_chart;
/// use chart::{ChartConfig, OutputSink};
/// # use tempfile::tempdir;
/// # let dir = tempdir().unwrap();
/// let input = dir.path().join("projects.json");
/// let output = dir.path().join("chart.md");
/// fs::write(&input, r#"{"projects": {"a": {"name": "Alpha", "activities": [1, 2]}}}"#).unwrap();
/// let cfg = ChartConfig::builder()
///     .input_path(&input)
///     .output_path(Some(output.clone()))
///     .build();
/// let sink = generate_chart(&cfg).unwrap();
/// assert_eq!(sink, OutputSink::File(output.clone()));
/// assert!(fs::read_to_string(&output).unwrap().contains("Alpha : ▎ (2)"));
/// ```
pub fn generate_chart(cfg: &ChartConfig) -> chart::Result<OutputSink> {
    let records = chart::load_projects(&cfg.input_path)?;
    let markdown = chart::render_report(&records, cfg);
    let sink = OutputSink::from_config(cfg);
    sink.deliver(&markdown)?;
    Ok(sink)
}
