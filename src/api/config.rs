use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::render::Marker;

/// Public widget bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Every field has a serde
/// default; an empty JSON object is a valid (empty) configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaPlotConfig {
    #[serde(default)]
    pub x_data: Vec<[f64; 2]>,
    #[serde(default)]
    pub y_data: Vec<[f64; 2]>,
    /// `None` defaults labels to stringified 1-based indices.
    #[serde(default)]
    pub item_labels: Option<Vec<String>>,
    #[serde(default = "default_endpoint_labels")]
    pub endpoint_labels: [String; 2],
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default = "default_true")]
    pub item_labels_visible: bool,
    #[serde(default = "default_true")]
    pub grid_visible: bool,
    /// Empty means the default two-color palette.
    #[serde(default)]
    pub color_order: Vec<Color>,
    #[serde(default)]
    pub marker: Marker,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

impl Default for DeltaPlotConfig {
    fn default() -> Self {
        Self {
            x_data: Vec::new(),
            y_data: Vec::new(),
            item_labels: None,
            endpoint_labels: default_endpoint_labels(),
            title: None,
            x_label: None,
            y_label: None,
            item_labels_visible: true,
            grid_visible: true,
            color_order: Vec::new(),
            marker: Marker::default(),
            line_width: default_line_width(),
        }
    }
}

fn default_endpoint_labels() -> [String; 2] {
    ["Start".to_owned(), "End".to_owned()]
}

fn default_true() -> bool {
    true
}

fn default_line_width() -> f64 {
    2.0
}
