use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// RGB color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Channel-wise linear interpolation toward `other` at `t` in 0..=1.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            red: self.red + (other.red - self.red) * t,
            green: self.green + (other.green - self.green) * t,
            blue: self.blue + (other.blue - self.blue) * t,
        }
    }

    /// Parses a color spec: a known name or a `#rrggbb` hex literal.
    pub fn parse(spec: &str) -> PlotResult<Self> {
        let trimmed = spec.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "black" | "k" => return Ok(Self::rgb(0.0, 0.0, 0.0)),
            "white" | "w" => return Ok(Self::rgb(1.0, 1.0, 1.0)),
            "red" | "r" => return Ok(Self::rgb(1.0, 0.0, 0.0)),
            "green" | "g" => return Ok(Self::rgb(0.0, 1.0, 0.0)),
            "blue" | "b" => return Ok(Self::rgb(0.0, 0.0, 1.0)),
            "cyan" | "c" => return Ok(Self::rgb(0.0, 1.0, 1.0)),
            "magenta" | "m" => return Ok(Self::rgb(1.0, 0.0, 1.0)),
            "yellow" | "y" => return Ok(Self::rgb(1.0, 1.0, 0.0)),
            _ => {}
        }

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() == 6 && hex.is_ascii() {
                let parse_channel = |slice: &str| -> Option<f64> {
                    u8::from_str_radix(slice, 16)
                        .ok()
                        .map(|v| f64::from(v) / 255.0)
                };
                if let (Some(red), Some(green), Some(blue)) = (
                    parse_channel(&hex[0..2]),
                    parse_channel(&hex[2..4]),
                    parse_channel(&hex[4..6]),
                ) {
                    return Ok(Self::rgb(red, green, blue));
                }
            }
        }

        Err(PlotError::InvalidData(format!(
            "unparseable color spec: `{trimmed}`"
        )))
    }
}
