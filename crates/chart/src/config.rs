use serde::{Deserialize, Serialize};

use crate::axis::{XAxis, YAxis};
use crate::series::GanttSeries;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTitle {
    pub text: String,
}

/// The complete chart configuration handed to the external gantt renderer.
///
/// This is the output boundary of the pipeline: a plain data object the
/// renderer consumes as-is. Field names serialize in the camelCase shape
/// the charting library expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: ChartTitle,
    /// `[months_axis, years_axis]` — the second is linked to the first.
    pub x_axis: Vec<XAxis>,
    pub y_axis: YAxis,
    pub series: Vec<GanttSeries>,
}
