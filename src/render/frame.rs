use crate::core::{AxisLimits, ColorGradient};
use crate::error::{PlotError, PlotResult};
use crate::render::{LegendEntryPrimitive, PatchPrimitive, TextPrimitive};

/// Axis-bound resolution for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LimitPlan {
    /// Leave the bounds to the host's automatic computation.
    Auto,
    Fixed(AxisLimits),
}

/// Tick resolution for the y axis.
#[derive(Debug, Clone, PartialEq)]
pub enum TickPlan {
    /// Host-computed positions and labels.
    Auto,
    Fixed {
        positions: Vec<f64>,
        labels: Vec<String>,
    },
}

/// Which axes carry grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxes {
    None,
    XOnly,
    Both,
}

/// Axes-level derived state applied alongside the draw requests.
#[derive(Debug, Clone, PartialEq)]
pub struct AxesPlan {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_limits: LimitPlan,
    pub y_limits: LimitPlan,
    pub y_ticks: TickPlan,
    pub grid: GridAxes,
}

/// Backend-agnostic scene for one widget refresh.
///
/// Carries exactly one patch draw request, exactly two legend entries, and
/// zero or more item-label text requests, plus the axes plan and colormap.
#[derive(Debug, Clone)]
pub struct SurfaceFrame {
    pub axes: AxesPlan,
    pub colormap: ColorGradient,
    pub patch: PatchPrimitive,
    pub legend: [LegendEntryPrimitive; 2],
    pub labels: Vec<TextPrimitive>,
}

impl SurfaceFrame {
    pub fn validate(&self) -> PlotResult<()> {
        if let TickPlan::Fixed { positions, labels } = &self.axes.y_ticks {
            if positions.len() != labels.len() {
                return Err(PlotError::InvalidData(
                    "tick positions and labels must have equal lengths".to_owned(),
                ));
            }
        }
        self.patch.validate()?;
        for entry in &self.legend {
            entry.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        Ok(())
    }

    /// True when the frame draws no segments (degraded or empty dataset).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.patch.patch_x.is_empty()
    }
}
