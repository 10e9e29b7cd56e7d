use crate::error::{PlotError, PlotResult};

pub(super) fn validate_line_width(width: f64) -> PlotResult<f64> {
    if !width.is_finite() || width <= 0.0 {
        return Err(PlotError::InvalidData(format!(
            "line width must be finite and > 0, got {width}"
        )));
    }
    Ok(width)
}

pub(super) fn validate_endpoint_labels(labels: &[String; 2]) -> PlotResult<()> {
    for (slot, label) in labels.iter().enumerate() {
        if label.is_empty() {
            return Err(PlotError::InvalidData(format!(
                "endpoint label {slot} must not be empty"
            )));
        }
    }
    Ok(())
}
