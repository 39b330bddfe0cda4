pub mod colors;
pub mod dates;
pub mod error;
pub mod model;
pub mod options;
pub mod parsers;
pub mod views;

pub use colors::ColorSource;
pub use error::GanttError;
pub use model::PhaseRecord;
pub use options::{
    DEFAULT_ROWS, GanttOptions, Presentation, VISUALIZATION_NAME, VISUALIZATION_TYPE,
};
pub use views::{AxisBounds, axis_bounds, build_chart, group_by_project};
