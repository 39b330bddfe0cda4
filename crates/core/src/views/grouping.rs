use std::collections::HashMap;

use gantt_viz_chart::{GanttSeries, Segment};

use crate::colors::{ColorSource, resolve_color};
use crate::dates;
use crate::error::GanttError;
use crate::model::PhaseRecord;

/// Partition phase rows into one series per project.
///
/// Series appear in first-seen project order; within a series, segments keep
/// the input row order (no re-sorting by date or name). Every segment's `y`
/// is the 0-based index of its series, which is also the project's row on
/// the category axis.
///
/// Returns the series list plus the distinct project names in the same
/// order, for use as category labels.
pub fn group_by_project(
    records: &[PhaseRecord],
    color_source: ColorSource,
) -> Result<(Vec<GanttSeries>, Vec<String>), GanttError> {
    let mut series: Vec<GanttSeries> = Vec::new();
    // Explicit insertion-ordered index: project name -> position in `series`.
    // Grouping never iterates an unordered map, so first-seen order holds
    // on any platform.
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let position = match positions.get(record.project.as_str()) {
            Some(&p) => p,
            None => {
                let p = series.len();
                positions.insert(record.project.clone(), p);
                series.push(GanttSeries::new(record.project.clone()));
                p
            }
        };

        let segment = Segment {
            id: record.phase_id.clone(),
            name: record.phase.clone(),
            start: parse_date("phase_start", &record.phase_start)?,
            end: parse_date("phase_end", &record.phase_end)?,
            y: position,
            color: resolve_color(color_source, &record.phase, record.color.as_deref()),
        };
        series[position].data.push(segment);
    }

    let categories = series.iter().map(|s| s.name.clone()).collect();
    Ok((series, categories))
}

fn parse_date(field: &'static str, value: &str) -> Result<i64, GanttError> {
    dates::parse_epoch_ms(value).map_err(|source| GanttError::DataFormat {
        field,
        value: value.to_string(),
        source,
    })
}
