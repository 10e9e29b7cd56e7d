pub mod color;
pub mod dataset;
pub mod geometry;
pub mod gradient;
pub mod limits;

pub use color::Color;
pub use dataset::{Dataset, YDataSource};
pub use geometry::{END_COLOR_INDEX, GeometryBuffers, START_COLOR_INDEX, build_geometry};
pub use gradient::{ColorGradient, GRADIENT_STEPS};
pub use limits::{AxisLimits, LimitsMode};
