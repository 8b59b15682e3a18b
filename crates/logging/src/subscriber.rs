// crates/logging/src/subscriber.rs
#![allow(missing_docs)]

use crate::flags::{LogFormat, SubscriberConfig};
use crate::formatter::ChartFormatter;
use crate::json_format::JsonFormatter;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt as tracing_fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

/// Map `-q` and repeated `-v` to the default level filter.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose > 2 {
        LevelFilter::TRACE
    } else if verbose > 1 {
        LevelFilter::DEBUG
    } else if verbose > 0 {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Build a [`tracing`] subscriber writing to stderr and, optionally, a log
/// file. `RUST_LOG` directives refine the level chosen from `cfg`.
pub fn subscriber(cfg: SubscriberConfig) -> io::Result<Box<dyn tracing::Subscriber + Send + Sync>> {
    let SubscriberConfig {
        format,
        verbose,
        quiet,
        log_file,
        colored,
        timestamps,
        width,
    } = cfg;

    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, quiet).into())
        .from_env_lossy();

    let base = tracing_fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(false);
    let base = if colored { base } else { base.with_ansi(false) };
    let fmt_layer = match format {
        LogFormat::Json => base.event_format(JsonFormatter).boxed(),
        LogFormat::Text => base
            .event_format(ChartFormatter::new(timestamps).with_width(width))
            .boxed(),
    };

    let registry = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let file_layer = if let Some((path, fmt)) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let base = tracing_fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false);
        let layer = match fmt {
            LogFormat::Json => base.event_format(JsonFormatter).boxed(),
            LogFormat::Text => base
                .event_format(ChartFormatter::new(true).with_width(Some(usize::MAX)))
                .boxed(),
        };
        Some(layer)
    } else {
        None
    };

    let registry = registry.with(file_layer);
    Ok(Box::new(registry))
}

/// Initialise the global [`tracing`] subscriber.
pub fn init(cfg: SubscriberConfig) -> io::Result<()> {
    subscriber(cfg)?.init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(3, true), LevelFilter::ERROR);
    }

    #[test]
    fn verbosity_steps() {
        assert_eq!(level_for(0, false), LevelFilter::WARN);
        assert_eq!(level_for(1, false), LevelFilter::INFO);
        assert_eq!(level_for(2, false), LevelFilter::DEBUG);
        assert_eq!(level_for(3, false), LevelFilter::TRACE);
        assert_eq!(level_for(9, false), LevelFilter::TRACE);
    }
}
