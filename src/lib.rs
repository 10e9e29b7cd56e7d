//! deltaplot: a delta ("start vs end") chart widget core.
//!
//! The crate owns coordinate bookkeeping and display-property translation for
//! a single segment-per-item chart and emits materialized draw frames against
//! a host-injected [`render::RenderSurface`]. Windowing, rasterization, and
//! input handling stay with the host GUI framework.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{DeltaPlot, DeltaPlotConfig, PlotArg};
pub use error::{PlotError, PlotResult};
