use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::PhaseRecord;
use crate::options::GanttOptions;

#[derive(Debug, Error)]
pub enum RowsError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row}: missing field {field:?}")]
    MissingField { row: usize, field: String },
    #[error("row {row}: field {field:?} is not a string or number")]
    BadScalar { row: usize, field: String },
}

/// One column of the upstream result set.
#[derive(Debug, Clone, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default, rename = "type")]
    pub data_type: Option<String>,
}

/// The tabular result set the upstream query runner hands to a
/// visualization: a column list plus one JSON object per row, keyed by
/// column name.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Map<String, Value>>,
}

impl QueryResult {
    /// Column names in result order, for the editor's column selector.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }
}

/// Deserialize a raw query-result payload.
pub fn parse_query_result(data: &[u8]) -> Result<QueryResult, RowsError> {
    Ok(serde_json::from_slice(data)?)
}

/// Map result-set rows to phase records.
///
/// The `project` field is read from the column the options name (the
/// editor's single setting), falling back to the literal `project` column
/// when unset. Identifier and date values may arrive as JSON strings or
/// numbers; both normalize to strings here.
pub fn parse_rows(
    result: &QueryResult,
    options: &GanttOptions,
) -> Result<Vec<PhaseRecord>, RowsError> {
    let project_column = options.project_column();
    let mut records = Vec::with_capacity(result.rows.len());

    for (row, fields) in result.rows.iter().enumerate() {
        records.push(PhaseRecord {
            project: required(fields, project_column, row)?,
            project_id: required(fields, "project_id", row)?,
            phase: required(fields, "phase", row)?,
            phase_id: required(fields, "phase_id", row)?,
            phase_start: required(fields, "phase_start", row)?,
            phase_end: required(fields, "phase_end", row)?,
            color: optional(fields, "color", row)?,
        });
    }

    Ok(records)
}

fn required(fields: &Map<String, Value>, field: &str, row: usize) -> Result<String, RowsError> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(RowsError::MissingField {
            row,
            field: field.to_string(),
        }),
        Some(value) => as_scalar(value).ok_or_else(|| RowsError::BadScalar {
            row,
            field: field.to_string(),
        }),
    }
}

fn optional(
    fields: &Map<String, Value>,
    field: &str,
    row: usize,
) -> Result<Option<String>, RowsError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => as_scalar(value)
            .map(Some)
            .ok_or_else(|| RowsError::BadScalar {
                row,
                field: field.to_string(),
            }),
    }
}

fn as_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
