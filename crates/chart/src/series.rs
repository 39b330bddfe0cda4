use serde::{Deserialize, Serialize};

/// A single phase interval rendered as one bar in the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Stable identifier of the phase this bar represents.
    pub id: String,
    /// Display name (phase label shown in tooltips / data labels).
    pub name: String,
    /// Start of the interval, epoch milliseconds.
    pub start: i64,
    /// End of the interval, epoch milliseconds.
    pub end: i64,
    /// Row index on the category axis: the 0-based position of the owning
    /// series in the series list.
    pub y: usize,
    /// Explicit bar color. When absent the renderer falls back to its own
    /// series palette.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Segment {
    pub fn duration_ms(&self) -> i64 {
        self.end - self.start
    }
}

/// The ordered collection of segments belonging to one project.
///
/// One series per distinct project, in first-seen order; `data` preserves
/// the input row order (segments are never re-sorted by date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttSeries {
    /// Project display name.
    pub name: String,
    /// Segments in input encounter order.
    pub data: Vec<Segment>,
}

impl GanttSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Vec::new(),
        }
    }
}
