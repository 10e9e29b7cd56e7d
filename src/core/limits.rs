use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Validated axis bounds: both finite, `upper > lower`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub lower: f64,
    pub upper: f64,
}

impl AxisLimits {
    pub fn new(lower: f64, upper: f64) -> PlotResult<Self> {
        if !lower.is_finite() || !upper.is_finite() || upper <= lower {
            return Err(PlotError::InvalidLimits { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }
}

/// Records whether axis bounds were fixed explicitly or left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LimitsMode {
    #[default]
    Auto,
    Manual,
}
