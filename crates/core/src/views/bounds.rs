use gantt_viz_chart::{DAY_MS, GanttSeries};

use crate::error::GanttError;

/// Padding added on each side of the display window: 15 days.
pub const BOUNDS_PAD_MS: i64 = 15 * DAY_MS;

/// The `[min, max]` millisecond window the time axis is configured to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisBounds {
    pub min: i64,
    pub max: i64,
}

/// Compute the display window for a series list.
///
/// The window is anchored on the start of the *first* segment of the
/// *first* series and the end of the *last* segment of the *last* series,
/// padded by [`BOUNDS_PAD_MS`] on each side. Middle series are not scanned:
/// a segment there that starts earlier or ends later than the anchors falls
/// outside the window. This matches the long-standing behavior of the
/// chart and is pinned by regression tests; widening to a true global
/// min/max needs a product decision first.
pub fn axis_bounds(series: &[GanttSeries]) -> Result<AxisBounds, GanttError> {
    let first = series
        .first()
        .and_then(|s| s.data.first())
        .ok_or(GanttError::EmptyData)?;
    let last = series
        .last()
        .and_then(|s| s.data.last())
        .ok_or(GanttError::EmptyData)?;

    Ok(AxisBounds {
        min: first.start - BOUNDS_PAD_MS,
        max: last.end + BOUNDS_PAD_MS,
    })
}
