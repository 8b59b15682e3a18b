// crates/logging/src/json_format.rs

use std::fmt::Write as _;

use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{Event, Subscriber};
use tracing_serde::{AsSerde, fields::AsMap};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::formatter::PROGRAM;

/// One JSON object per line: `timestamp`, `program`, `level`, `target` and
/// the event's `fields`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormatter;

fn event_value(event: &Event<'_>) -> Result<Value, std::fmt::Error> {
    let meta = event.metadata();
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|_| std::fmt::Error)?;
    let level = serde_json::to_value(meta.level().as_serde()).map_err(|_| std::fmt::Error)?;
    let fields = serde_json::to_value(event.field_map()).map_err(|_| std::fmt::Error)?;
    Ok(json!({
        "timestamp": timestamp,
        "program": PROGRAM,
        "level": level,
        "target": meta.target(),
        "fields": fields,
    }))
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let line = serde_json::to_string(&event_value(event)?).map_err(|_| std::fmt::Error)?;
        writeln!(writer, "{line}")
    }
}
