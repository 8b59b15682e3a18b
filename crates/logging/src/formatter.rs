// crates/logging/src/formatter.rs
use owo_colors::OwoColorize;
use std::fmt;
use time::{OffsetDateTime, macros::format_description};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

pub const PROGRAM: &str = "activity-chart";

/// Plain text event format: `activity-chart: [warning: ]message key=value`,
/// word-wrapped to the terminal width.
pub struct ChartFormatter {
    timestamps: bool,
    width: Option<usize>,
}

impl ChartFormatter {
    pub fn new(timestamps: bool) -> Self {
        Self {
            timestamps,
            width: None,
        }
    }

    pub fn with_width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    fn columns(&self) -> usize {
        self.width
            .or_else(|| {
                std::env::var("COLUMNS")
                    .ok()
                    .and_then(|v| v.parse().ok())
            })
            .filter(|&c| c > 0)
            .unwrap_or(80)
    }

    fn wrap(msg: &str, width: usize) -> String {
        let mut out = String::new();
        let mut line_len = 0usize;
        for word in msg.split_whitespace() {
            let wlen = word.chars().count();
            if line_len == 0 {
                out.push_str(word);
                line_len = wlen;
            } else if line_len + 1 + wlen > width {
                out.push('\n');
                out.push_str(word);
                line_len = wlen;
            } else {
                out.push(' ');
                out.push_str(word);
                line_len += 1 + wlen;
            }
        }
        out
    }
}

struct MsgVisitor {
    msg: String,
    fields: Vec<(String, String)>,
}

impl MsgVisitor {
    fn new() -> Self {
        Self {
            msg: String::new(),
            fields: Vec::new(),
        }
    }
}

impl Visit for MsgVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            if !self.msg.is_empty() {
                self.msg.push(' ');
            }
            self.msg.push_str(value);
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            if !self.msg.is_empty() {
                self.msg.push(' ');
            }
            self.msg.push_str(&format!("{value:?}"));
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

fn format_time() -> Result<String, fmt::Error> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let fmt = format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");
    now.format(&fmt).map_err(|_| fmt::Error)
}

fn level_prefix(level: Level) -> Option<&'static str> {
    match level {
        Level::ERROR => Some("error:"),
        Level::WARN => Some("warning:"),
        _ => None,
    }
}

/// Level label followed by a space, colored when the writer accepts ANSI.
fn push_level(line: &mut String, level: Level, ansi: bool) {
    let Some(label) = level_prefix(level) else {
        return;
    };
    if !ansi {
        line.push_str(label);
    } else if level == Level::ERROR {
        line.push_str(&label.red().bold().to_string());
    } else {
        line.push_str(&label.yellow().bold().to_string());
    }
    line.push(' ');
}

impl<S, N> FormatEvent<S, N> for ChartFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MsgVisitor::new();
        event.record(&mut visitor);

        let mut line = String::new();
        if self.timestamps {
            line.push_str(&format_time()?);
            line.push(' ');
        }
        line.push_str(PROGRAM);
        line.push_str(": ");
        push_level(&mut line, *event.metadata().level(), writer.has_ansi_escapes());
        if visitor.msg.is_empty() {
            line.push_str(event.metadata().target());
        } else {
            line.push_str(&visitor.msg);
        }
        for (name, value) in &visitor.fields {
            line.push(' ');
            line.push_str(name);
            line.push('=');
            line.push_str(value);
        }

        let wrapped = Self::wrap(&line, self.columns());
        for (i, part) in wrapped.lines().enumerate() {
            if i > 0 {
                writer.write_char('\n')?;
            }
            writer.write_str(part)?;
        }
        writer.write_char('\n')
    }
}
