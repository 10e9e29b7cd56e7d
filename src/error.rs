use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("invalid limits: lower={lower}, upper={upper} (upper must exceed lower)")]
    InvalidLimits { lower: f64, upper: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
