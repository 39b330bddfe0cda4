use gantt_viz_chart::DAY_MS;
use serde::{Deserialize, Serialize};

use crate::colors::ColorSource;

/// Type tag under which the host application registers this visualization.
pub const VISUALIZATION_TYPE: &str = "GANTT_CHART";
/// Human-readable name shown in the host's visualization picker.
pub const VISUALIZATION_NAME: &str = "Gantt Chart";
/// Default grid rows the host reserves for a new instance.
pub const DEFAULT_ROWS: u32 = 8;

/// Cosmetic axis parameters. Deployments of the chart differ only in these
/// values; the algorithmic contract is unaffected by them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Presentation {
    /// Tick spacing of the month axis, milliseconds.
    pub month_tick_interval_ms: i64,
    pub month_label_format: String,
    pub month_label_font_size: String,
    /// Allowed month-label rotations in degrees.
    pub month_label_rotation: Vec<i32>,
    /// Tick spacing of the linked year axis, milliseconds.
    pub year_tick_interval_ms: i64,
    pub year_label_format: String,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            month_tick_interval_ms: 30 * DAY_MS,
            month_label_format: "{value:%b}".into(),
            month_label_font_size: "8px".into(),
            month_label_rotation: vec![-90],
            year_tick_interval_ms: 365 * DAY_MS,
            year_label_format: "{value:%Y}".into(),
        }
    }
}

/// User-configurable options, as stored by the host application.
///
/// Deserialization merges stored partial options over the defaults; keys
/// this version does not know are ignored rather than rejected, so stored
/// options survive upgrades in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GanttOptions {
    /// Name of the input column that maps to the project field. Empty means
    /// unset: the literal `project` column is used.
    pub project_name: String,
    pub color_source: ColorSource,
    pub title: String,
    pub presentation: Presentation,
}

impl Default for GanttOptions {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            color_source: ColorSource::default(),
            title: "Projects".into(),
            presentation: Presentation::default(),
        }
    }
}

impl GanttOptions {
    /// The column the `project` field is read from.
    pub fn project_column(&self) -> &str {
        if self.project_name.is_empty() {
            "project"
        } else {
            &self.project_name
        }
    }
}
