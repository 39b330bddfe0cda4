use thiserror::Error;

use crate::dates::DateParseError;
use crate::parsers::RowsError;

#[derive(Debug, Error)]
pub enum GanttError {
    /// The input produced no segments, so there is no display window.
    #[error("no phase rows to chart")]
    EmptyData,
    /// A phase date string failed strict validation. Invalid timestamps are
    /// rejected here rather than carried through as bogus axis values.
    #[error("invalid {field} value {value:?}")]
    DataFormat {
        field: &'static str,
        value: String,
        #[source]
        source: DateParseError,
    },
    #[error("rows: {0}")]
    Rows(#[from] RowsError),
}
