use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fixed phase-name → color palette, used when the result set has no
/// `color` column of its own.
const PHASE_PALETTE: &[(&str, &str)] = &[
    ("Early Engagement", "#e1ebf3"),
    ("Proponent Time: Project Description", "#ccffff"),
    ("Readiness Decision", "#c3d7e8"),
    ("Process Planning", "#a6c3dd"),
    ("Proponent Time: Application Development", "#ccffff"),
    ("Application Development & Review", "#faeadc"),
    ("Proponent Time: Revised Application", "#ccffff"),
    ("Effects Assessment", "#f6d5b9"),
    ("Recommendation", "#f2c096"),
    ("Referral/Decision", "#f2c096"),
];

/// Where segment colors come from. One chart component, two deployment
/// profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSource {
    /// Every phase is looked up in the static palette.
    #[default]
    Table,
    /// The record's own `color` value wins; records without one fall back
    /// to the palette.
    Field,
}

/// Look a phase name up in the static palette.
pub fn palette_color(phase: &str) -> Option<&'static str> {
    PHASE_PALETTE
        .iter()
        .find(|(name, _)| *name == phase)
        .map(|(_, color)| *color)
}

/// Resolve the display color for one phase.
///
/// A miss is not an error: the segment renders in the chart's default
/// series color. Misses are logged at warn level so uncolored phases are
/// observable.
pub fn resolve_color(
    source: ColorSource,
    phase: &str,
    explicit: Option<&str>,
) -> Option<String> {
    let resolved = match source {
        ColorSource::Table => palette_color(phase).map(str::to_owned),
        ColorSource::Field => explicit
            .map(str::to_owned)
            .or_else(|| palette_color(phase).map(str::to_owned)),
    };
    if resolved.is_none() {
        warn!(phase, "no color for phase, renderer default will apply");
    }
    resolved
}
