mod frame;
mod null_surface;
mod primitives;

pub use frame::{AxesPlan, GridAxes, LimitPlan, SurfaceFrame, TickPlan};
pub use null_surface::NullSurface;
pub use primitives::{
    LegendEntryPrimitive, Marker, PatchPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::PlotResult;

/// Contract implemented by the host rendering surface.
///
/// Surfaces receive a fully materialized, deterministic [`SurfaceFrame`] per
/// refresh so drawing code stays isolated from the widget's property and
/// reconciliation logic.
pub trait RenderSurface {
    fn apply(&mut self, frame: &SurfaceFrame) -> PlotResult<()>;
}
