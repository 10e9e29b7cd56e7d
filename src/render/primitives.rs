use serde::{Deserialize, Serialize};

use crate::core::{Color, END_COLOR_INDEX, START_COLOR_INDEX};
use crate::error::{PlotError, PlotResult};

/// Marker glyph drawn at segment vertices and legend swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Marker {
    #[default]
    None,
    Point,
    Circle,
    Plus,
    Star,
    Cross,
    Square,
    Diamond,
    TriangleUp,
    TriangleDown,
}

impl Marker {
    /// Parses the host toolbox's single-character marker tokens.
    pub fn from_token(token: &str) -> PlotResult<Self> {
        match token.trim() {
            "none" | "" => Ok(Self::None),
            "." => Ok(Self::Point),
            "o" => Ok(Self::Circle),
            "+" => Ok(Self::Plus),
            "*" => Ok(Self::Star),
            "x" => Ok(Self::Cross),
            "s" | "square" => Ok(Self::Square),
            "d" | "diamond" => Ok(Self::Diamond),
            "^" => Ok(Self::TriangleUp),
            "v" => Ok(Self::TriangleDown),
            other => Err(PlotError::InvalidData(format!(
                "unrecognized marker token: `{other}`"
            ))),
        }
    }
}

/// The single multi-segment patch draw request emitted per refresh.
///
/// Vertex buffers carry NaN break markers every third slot; per-vertex color
/// indices select the gradient endpoint used to shade each vertex.
#[derive(Debug, Clone)]
pub struct PatchPrimitive {
    pub patch_x: Vec<f64>,
    pub patch_y: Vec<f64>,
    pub face_vertex_colors: Vec<u8>,
    pub marker: Marker,
    pub line_width: f64,
}

impl PatchPrimitive {
    pub fn validate(&self) -> PlotResult<()> {
        if self.patch_x.len() != self.patch_y.len()
            || self.patch_x.len() != self.face_vertex_colors.len()
        {
            return Err(PlotError::InvalidData(
                "patch buffers must have equal lengths".to_owned(),
            ));
        }
        if self.patch_x.len() % 3 != 0 {
            return Err(PlotError::InvalidData(
                "patch buffer length must be a multiple of 3".to_owned(),
            ));
        }
        for (slot, (x, y)) in self.patch_x.iter().zip(self.patch_y.iter()).enumerate() {
            // Every third slot is a break marker; the rest must be drawable.
            if slot % 3 == 2 {
                if !x.is_nan() || !y.is_nan() {
                    return Err(PlotError::InvalidData(format!(
                        "patch slot {slot} must be a NaN break marker"
                    )));
                }
            } else if !x.is_finite() || !y.is_finite() {
                return Err(PlotError::InvalidData(format!(
                    "patch vertex at slot {slot} must be finite"
                )));
            }
        }
        for index in &self.face_vertex_colors {
            if *index != START_COLOR_INDEX && *index != END_COLOR_INDEX {
                return Err(PlotError::InvalidData(format!(
                    "face vertex color index {index} is out of gradient range"
                )));
            }
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(PlotError::InvalidData(
                "patch line width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Invisible marker-only request whose sole purpose is one legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntryPrimitive {
    pub label: String,
    pub swatch: Color,
    pub marker: Marker,
}

impl LegendEntryPrimitive {
    pub fn validate(&self) -> PlotResult<()> {
        if self.label.is_empty() {
            return Err(PlotError::InvalidData(
                "legend entry label must not be empty".to_owned(),
            ));
        }
        self.swatch.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Draw request for one item label, anchored in data space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextPrimitive {
    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PlotError::InvalidData(
                "text anchor coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
