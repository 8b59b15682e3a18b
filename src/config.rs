// src/config.rs

use chart::ChartConfig;
use logging::{LogFormat, SubscriberConfig};
use std::path::PathBuf;

/// Configuration for one chart run: what to draw plus how to log it.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub chart: ChartConfig,
    pub log_format: LogFormat,
    pub verbose: u8,
    pub quiet: bool,
    pub log_file: Option<(PathBuf, LogFormat)>,
    pub colored: bool,
    pub timestamps: bool,
    /// Wrap width for text logs. `None` reads `$COLUMNS`.
    pub log_width: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            chart: ChartConfig::default(),
            log_format: LogFormat::Text,
            verbose: 0,
            quiet: false,
            log_file: None,
            colored: true,
            timestamps: false,
            log_width: None,
        }
    }
}

impl RunConfig {
    /// Create a new builder for [`RunConfig`].
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    pub fn subscriber_config(&self) -> SubscriberConfig {
        SubscriberConfig::builder()
            .format(self.log_format)
            .verbose(self.verbose)
            .quiet(self.quiet)
            .log_file(self.log_file.clone())
            .colored(self.colored)
            .timestamps(self.timestamps)
            .width(self.log_width)
            .build()
    }
}

/// Builder for [`RunConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct RunConfigBuilder {
    cfg: RunConfig,
}

impl RunConfigBuilder {
    pub fn chart(mut self, chart: ChartConfig) -> Self {
        self.cfg.chart = chart;
        self
    }

    /// Copies every logging option from an already assembled subscriber
    /// configuration.
    pub fn logging(mut self, logging: &SubscriberConfig) -> Self {
        self.cfg.log_format = logging.format;
        self.cfg.verbose = logging.verbose;
        self.cfg.quiet = logging.quiet;
        self.cfg.log_file = logging.log_file.clone();
        self.cfg.colored = logging.colored;
        self.cfg.timestamps = logging.timestamps;
        self.cfg.log_width = logging.width;
        self
    }

    pub fn log_format(mut self, log_format: LogFormat) -> Self {
        self.cfg.log_format = log_format;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.cfg.verbose = verbose;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.cfg.quiet = quiet;
        self
    }

    pub fn log_file(mut self, log_file: Option<(PathBuf, LogFormat)>) -> Self {
        self.cfg.log_file = log_file;
        self
    }

    pub fn colored(mut self, enable: bool) -> Self {
        self.cfg.colored = enable;
        self
    }

    pub fn timestamps(mut self, enable: bool) -> Self {
        self.cfg.timestamps = enable;
        self
    }

    pub fn log_width(mut self, width: Option<usize>) -> Self {
        self.cfg.log_width = width;
        self
    }

    pub fn build(self) -> RunConfig {
        self.cfg
    }
}
