use serde::{Deserialize, Serialize};

/// One input row: a single phase of a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseRecord {
    /// Display name of the owning project.
    pub project: String,
    /// Stable identifier of the owning project.
    pub project_id: String,
    /// Display name of this phase.
    pub phase: String,
    /// Stable identifier of this phase.
    pub phase_id: String,
    /// Phase start, as the query supplied it (ISO date or datetime string).
    pub phase_start: String,
    /// Phase end. Assumed to be >= `phase_start`; not validated.
    pub phase_end: String,
    /// Explicit display color. Present only when the result set carries a
    /// `color` column; otherwise the color comes from the phase palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
