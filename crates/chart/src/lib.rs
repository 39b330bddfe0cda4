pub mod axis;
pub mod config;
pub mod series;

pub use axis::{AxisLabels, DAY_MS, LabelStyle, XAxis, YAxis};
pub use config::{ChartConfig, ChartTitle};
pub use series::{GanttSeries, Segment};
