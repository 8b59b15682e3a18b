// src/run.rs

use chart::OutputSink;
use tracing::subscriber::with_default;

use crate::config::RunConfig;
use crate::{Error, Result, generate_chart};
use logging::subscriber;

/// Runs one chart with a subscriber scoped to this call.
pub fn generate_with_config(cfg: &RunConfig) -> Result<OutputSink> {
    let sub = subscriber(cfg.subscriber_config()).map_err(Error::Logging)?;
    with_default(sub, || -> Result<OutputSink> {
        tracing::debug!(input = %cfg.chart.input_path.display(), "generating chart");
        Ok(generate_chart(&cfg.chart)?)
    })
}
