// crates/logging/src/lib.rs
//! Logging setup shared by the activity-chart binary and library.
//!
//! Everything goes to stderr so stdout only ever carries the chart.

mod flags;
mod formatter;
mod json_format;
mod subscriber;

pub use flags::{LogFormat, SubscriberConfig, SubscriberConfigBuilder};
pub use formatter::{ChartFormatter, PROGRAM};
pub use json_format::JsonFormatter;
pub use subscriber::{init, level_for, subscriber};
