pub mod bounds;
pub mod chart;
pub mod grouping;

pub use bounds::{AxisBounds, BOUNDS_PAD_MS, axis_bounds};
pub use chart::build_chart;
pub use grouping::group_by_project;
