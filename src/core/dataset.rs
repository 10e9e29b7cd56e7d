use serde::{Deserialize, Serialize};

/// Controls whether y-axis positions come from explicit data or item order.
///
/// The tag is always derived from the current dataset via
/// [`Dataset::y_data_source`]; it is never stored or flipped independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YDataSource {
    /// Empty `y_data`: item index drives the y position and the axis shows
    /// item labels as ticks.
    ItemLabels,
    /// Non-empty `y_data`: y positions come from the data itself.
    Explicit,
}

/// Canonical widget data model held as parallel arrays.
///
/// `x_data[i]` is the `(x1, x2)` pair of item `i`, `y_data[i]` the optional
/// `(y1, y2)` pair, `item_labels[i]` its display label. Insertion order is
/// meaningful: it drives default labels and the y position in
/// [`YDataSource::ItemLabels`] mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub x_data: Vec<[f64; 2]>,
    pub y_data: Vec<[f64; 2]>,
    pub item_labels: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from start/end x pairs with index-derived labels.
    #[must_use]
    pub fn from_x(x_data: Vec<[f64; 2]>) -> Self {
        let item_labels = default_item_labels(x_data.len());
        Self {
            x_data,
            y_data: Vec::new(),
            item_labels,
        }
    }

    /// Builds a dataset with explicit y pairs and index-derived labels.
    #[must_use]
    pub fn from_xy(x_data: Vec<[f64; 2]>, y_data: Vec<[f64; 2]>) -> Self {
        let item_labels = default_item_labels(x_data.len());
        Self {
            x_data,
            y_data,
            item_labels,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x_data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_data.is_empty()
    }

    /// Derives the data-source tag from the current arrays.
    #[must_use]
    pub fn y_data_source(&self) -> YDataSource {
        if self.y_data.is_empty() {
            YDataSource::ItemLabels
        } else {
            YDataSource::Explicit
        }
    }

    /// Checks the parallel-array invariant.
    ///
    /// Disagreement is a soft failure: callers hide all visual output until
    /// sizes agree again instead of erroring.
    #[must_use]
    pub fn sizes_agree(&self) -> bool {
        let n = self.x_data.len();
        self.item_labels.len() == n && (self.y_data.is_empty() || self.y_data.len() == n)
    }
}

/// Stringified 1-based indices `"1".."N"`.
#[must_use]
pub fn default_item_labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| i.to_string()).collect()
}
