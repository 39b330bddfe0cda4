use serde::{Deserialize, Serialize};

/// One day in milliseconds, the base unit for tick intervals and padding.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Label styling forwarded to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
}

/// Tick label configuration for a time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabels {
    /// Renderer-side format template, e.g. `"{value:%b}"` for month
    /// abbreviations or `"{value:%Y}"` for years.
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<LabelStyle>,
    /// Allowed label rotations in degrees (e.g. `[-90]`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_rotation: Option<Vec<i32>>,
}

/// One time axis. The chart carries two: a month-granularity axis with the
/// display window, and a year-granularity axis linked to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    /// Spacing between ticks in milliseconds.
    pub tick_interval: i64,
    pub labels: AxisLabels,
    /// Lower edge of the display window, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Upper edge of the display window, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_date_indicator: Option<bool>,
    /// Index of the axis this one mirrors its extremes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_to: Option<usize>,
}

/// The category axis: one row per project, labeled by project name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxis {
    pub categories: Vec<String>,
}
