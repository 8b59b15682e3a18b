// crates/chart/src/loader.rs

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::{ChartError, Result};

/// A project reduced to what the chart needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: String,
    pub count: usize,
}

impl ProjectRecord {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Read the document at `path` and reduce every entry of its `projects`
/// mapping to a [`ProjectRecord`], in document order.
///
/// # Errors
///
/// Returns [`ChartError::FileNotFound`] if `path` does not exist,
/// [`ChartError::Read`] for other I/O failures, [`ChartError::InvalidJson`] if
/// the contents are not valid UTF-8 JSON and [`ChartError::EmptyProjectSet`]
/// if there is nothing to chart.
pub fn load_projects(path: &Path) -> Result<Vec<ProjectRecord>> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ChartError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ChartError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read project data");
    parse_projects(&bytes, path)
}

/// Parse an in-memory document. `path` is only used for error reporting.
pub fn parse_projects(bytes: &[u8], path: &Path) -> Result<Vec<ProjectRecord>> {
    let doc: Value = serde_json::from_slice(bytes).map_err(|source| ChartError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    let projects = match doc.get("projects") {
        Some(Value::Object(map)) if !map.is_empty() => map,
        Some(Value::Object(_)) | None => return Err(ChartError::EmptyProjectSet),
        Some(other) => {
            tracing::warn!(kind = json_kind(other), "`projects` is not a mapping");
            return Err(ChartError::EmptyProjectSet);
        }
    };

    let records: Vec<_> = projects
        .iter()
        .map(|(key, details)| record_from_details(key, details))
        .collect();
    tracing::debug!(projects = records.len(), "loaded projects");
    Ok(records)
}

fn record_from_details(key: &str, details: &Value) -> ProjectRecord {
    let Some(details) = details.as_object() else {
        tracing::warn!(
            project = key,
            kind = json_kind(details),
            "project details are not a mapping"
        );
        return ProjectRecord::new(key, 0);
    };
    let name = details
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(key);
    let count = details
        .get("activities")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    ProjectRecord::new(name, count)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
