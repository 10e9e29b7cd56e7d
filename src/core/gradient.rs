use tracing::warn;

use crate::core::Color;

/// Number of interpolation rows in a gradient table.
pub const GRADIENT_STEPS: usize = 255;

/// Default first/second order colors used when no `ColorOrder` is configured.
pub const DEFAULT_START_COLOR: Color = Color::rgb(0.0, 0.447, 0.741);
pub const DEFAULT_END_COLOR: Color = Color::rgb(0.85, 0.325, 0.098);

/// 255-row channel-wise linear interpolation table between two base colors.
///
/// Start vertices map to the first row, end vertices to the last.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGradient {
    rows: Vec<Color>,
}

impl ColorGradient {
    /// Interpolates between `start` and `end` across [`GRADIENT_STEPS`] rows.
    #[must_use]
    pub fn between(start: Color, end: Color) -> Self {
        let last = (GRADIENT_STEPS - 1) as f64;
        let rows = (0..GRADIENT_STEPS)
            .map(|row| start.lerp(end, row as f64 / last))
            .collect();
        Self { rows }
    }

    /// Degenerate gradient: every row is the same color.
    #[must_use]
    pub fn flat(color: Color) -> Self {
        Self::between(color, color)
    }

    /// Builds the gradient from a configured color order.
    ///
    /// One color yields a flat table. More than two colors is tolerated:
    /// only the first two are used and a warning is emitted.
    #[must_use]
    pub fn from_color_order(order: &[Color]) -> Self {
        match order {
            [] => Self::between(DEFAULT_START_COLOR, DEFAULT_END_COLOR),
            [only] => Self::flat(*only),
            [start, end] => Self::between(*start, *end),
            [start, end, rest @ ..] => {
                warn!(
                    configured = order.len(),
                    ignored = rest.len(),
                    "color order has more than two entries; extra colors are ignored"
                );
                Self::between(*start, *end)
            }
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Color] {
        &self.rows
    }

    /// Color of the start-vertex gradient endpoint (first row).
    #[must_use]
    pub fn start_color(&self) -> Color {
        self.rows[0]
    }

    /// Color of the end-vertex gradient endpoint (last row).
    #[must_use]
    pub fn end_color(&self) -> Color {
        self.rows[GRADIENT_STEPS - 1]
    }
}

impl Default for ColorGradient {
    fn default() -> Self {
        Self::from_color_order(&[])
    }
}
