use gantt_viz_chart::{AxisLabels, ChartConfig, ChartTitle, LabelStyle, XAxis, YAxis};
use tracing::debug;

use crate::error::GanttError;
use crate::model::PhaseRecord;
use crate::options::GanttOptions;
use crate::views::bounds::axis_bounds;
use crate::views::grouping::group_by_project;

/// Run the full pipeline: group rows into series, compute the display
/// window, assemble the renderer configuration.
pub fn build_chart(
    records: &[PhaseRecord],
    options: &GanttOptions,
) -> Result<ChartConfig, GanttError> {
    let (series, categories) = group_by_project(records, options.color_source)?;
    let bounds = axis_bounds(&series)?;
    let p = &options.presentation;

    let config = ChartConfig {
        title: ChartTitle {
            text: options.title.clone(),
        },
        x_axis: vec![
            XAxis {
                tick_interval: p.month_tick_interval_ms,
                labels: AxisLabels {
                    format: p.month_label_format.clone(),
                    style: Some(LabelStyle {
                        font_size: Some(p.month_label_font_size.clone()),
                    }),
                    auto_rotation: Some(p.month_label_rotation.clone()),
                },
                min: Some(bounds.min),
                max: Some(bounds.max),
                current_date_indicator: Some(false),
                linked_to: None,
            },
            XAxis {
                tick_interval: p.year_tick_interval_ms,
                labels: AxisLabels {
                    format: p.year_label_format.clone(),
                    style: None,
                    auto_rotation: None,
                },
                min: None,
                max: None,
                current_date_indicator: None,
                linked_to: Some(0),
            },
        ],
        y_axis: YAxis { categories },
        series,
    };

    debug!(
        series = config.series.len(),
        min = bounds.min,
        max = bounds.max,
        "assembled gantt chart config"
    );
    Ok(config)
}
