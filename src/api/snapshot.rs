use serde::{Deserialize, Serialize};

use crate::core::{AxisLimits, Color, LimitsMode, YDataSource};
use crate::error::{PlotError, PlotResult};

pub const WIDGET_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable save/restore record for the widget's view state.
///
/// Every field is optional-tolerant: a missing limit pair means "leave the
/// axis automatic", an empty color order means "leave the current palette".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    #[serde(default)]
    pub x_limits: Option<AxisLimits>,
    #[serde(default)]
    pub y_limits: Option<AxisLimits>,
    #[serde(default)]
    pub y_limits_mode: LimitsMode,
    /// Recorded for diagnostics; the live tag is derived from the dataset.
    #[serde(default)]
    pub y_data_source: Option<YDataSource>,
    #[serde(default)]
    pub color_order: Vec<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: WidgetSnapshot,
}

impl WidgetSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = WidgetSnapshotJsonContractV1 {
            schema_version: WIDGET_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either the versioned contract or a bare snapshot payload.
    ///
    /// The contract is tried first: every snapshot field is defaultable, so
    /// a bare parse would silently accept the wrapper object too.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        if let Ok(payload) = serde_json::from_str::<WidgetSnapshotJsonContractV1>(input) {
            if payload.schema_version != WIDGET_SNAPSHOT_JSON_SCHEMA_V1 {
                return Err(PlotError::InvalidData(format!(
                    "unsupported snapshot schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.snapshot);
        }
        serde_json::from_str::<WidgetSnapshot>(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })
    }
}
