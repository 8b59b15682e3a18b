// crates/chart/src/sink.rs

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::ChartConfig;
use crate::{ChartError, Result};

/// Where a rendered chart goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputSink {
    /// Print to standard output.
    Console,
    /// Create or truncate the file and write the chart into it.
    File(PathBuf),
}

impl OutputSink {
    pub fn from_config(cfg: &ChartConfig) -> Self {
        match &cfg.output_path {
            Some(path) => OutputSink::File(path.clone()),
            None => OutputSink::Console,
        }
    }

    /// Deliver `markdown`, printing to the process stdout for
    /// [`OutputSink::Console`].
    pub fn deliver(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.deliver_to(markdown, &mut lock)
    }

    /// Deliver `markdown`, using `console` in place of stdout.
    pub fn deliver_to<W: Write>(&self, markdown: &str, console: &mut W) -> Result<()> {
        match self {
            OutputSink::Console => {
                writeln!(console, "{markdown}")
                    .and_then(|()| console.flush())
                    .map_err(ChartError::Stdout)
            }
            OutputSink::File(path) => {
                fs::write(path, markdown).map_err(|source| ChartError::OutputWrite {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!(path = %path.display(), bytes = markdown.len(), "wrote chart");
                Ok(())
            }
        }
    }
}
