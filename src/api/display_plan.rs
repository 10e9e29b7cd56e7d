use tracing::warn;

use crate::core::{AxisLimits, ColorGradient, Dataset, LimitsMode, YDataSource};
use crate::render::{
    GridAxes, LegendEntryPrimitive, LimitPlan, Marker, TextHAlign, TextPrimitive, TextVAlign,
    TickPlan,
};

/// Item labels are nudged below their anchor by this fraction of the y span.
const ITEM_LABEL_NUDGE_RATIO: f64 = 0.01;

/// User-controlled view state, mutated only by property assignment or by
/// captured interactive limit changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub y_limits_mode: LimitsMode,
    pub manual_y_limits: Option<AxisLimits>,
    pub manual_x_limits: Option<AxisLimits>,
    pub grid_visible: bool,
    pub item_labels_visible: bool,
    pub endpoint_labels: [String; 2],
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            y_limits_mode: LimitsMode::Auto,
            manual_y_limits: None,
            manual_x_limits: None,
            grid_visible: true,
            item_labels_visible: true,
            endpoint_labels: ["Start".to_owned(), "End".to_owned()],
        }
    }
}

/// Complete derived visual state for one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPlan {
    pub x_limits: LimitPlan,
    pub y_limits: LimitPlan,
    pub y_ticks: TickPlan,
    pub grid: GridAxes,
    pub colormap: ColorGradient,
    pub legend: [LegendEntryPrimitive; 2],
    pub item_labels: Vec<TextPrimitive>,
    /// Set when a data size mismatch degraded the plan to a blank chart.
    pub degraded: bool,
}

/// Computes the derived display plan from current widget state.
///
/// Pure and idempotent: recomputing on unchanged input yields an identical
/// plan. The legend always carries exactly two endpoint entries regardless of
/// item count; a size-mismatched dataset degrades to a blank plan (no ticks,
/// no grid, no item labels) instead of erroring.
#[must_use]
pub fn build_display_plan(
    dataset: &Dataset,
    view: &ViewState,
    gradient: &ColorGradient,
    marker: Marker,
) -> DisplayPlan {
    let legend = [
        LegendEntryPrimitive {
            label: view.endpoint_labels[0].clone(),
            swatch: gradient.start_color(),
            marker: legend_marker(marker),
        },
        LegendEntryPrimitive {
            label: view.endpoint_labels[1].clone(),
            swatch: gradient.end_color(),
            marker: legend_marker(marker),
        },
    ];

    let x_limits = match view.manual_x_limits {
        Some(limits) => LimitPlan::Fixed(limits),
        None => LimitPlan::Auto,
    };

    if !dataset.sizes_agree() {
        warn!(
            x_len = dataset.x_data.len(),
            y_len = dataset.y_data.len(),
            labels_len = dataset.item_labels.len(),
            "dataset sizes disagree; hiding chart until they agree again"
        );
        return DisplayPlan {
            x_limits,
            y_limits: resolved_manual_y(view).unwrap_or(LimitPlan::Auto),
            y_ticks: TickPlan::Auto,
            grid: GridAxes::None,
            colormap: gradient.clone(),
            legend,
            item_labels: Vec::new(),
            degraded: true,
        };
    }

    let source = dataset.y_data_source();
    let count = dataset.len();

    let y_ticks = match source {
        YDataSource::ItemLabels => TickPlan::Fixed {
            positions: (1..=count).map(|i| i as f64).collect(),
            labels: dataset.item_labels.clone(),
        },
        YDataSource::Explicit => TickPlan::Auto,
    };

    // Priority: manual limits, then label-tick centering, then host auto.
    let y_limits = resolved_manual_y(view).unwrap_or_else(|| match source {
        YDataSource::ItemLabels if count > 0 => LimitPlan::Fixed(AxisLimits {
            lower: 0.5,
            upper: count as f64 + 0.5,
        }),
        _ => LimitPlan::Auto,
    });

    let grid = if !view.grid_visible {
        GridAxes::None
    } else {
        match source {
            // Discrete item rows make a y grid visually redundant.
            YDataSource::ItemLabels => GridAxes::XOnly,
            YDataSource::Explicit => GridAxes::Both,
        }
    };

    let item_labels = build_item_labels(dataset, view, source, y_limits);

    DisplayPlan {
        x_limits,
        y_limits,
        y_ticks,
        grid,
        colormap: gradient.clone(),
        legend,
        item_labels,
        degraded: false,
    }
}

fn resolved_manual_y(view: &ViewState) -> Option<LimitPlan> {
    if view.y_limits_mode == LimitsMode::Manual {
        view.manual_y_limits.map(LimitPlan::Fixed)
    } else {
        None
    }
}

fn legend_marker(marker: Marker) -> Marker {
    // The legend swatches need a visible glyph even when the segments
    // themselves draw without markers.
    if marker == Marker::None {
        Marker::Circle
    } else {
        marker
    }
}

/// Item-label placements: Explicit mode only, anchored at the start point and
/// nudged downward by 1% of the y span; items with a non-finite start or end
/// coordinate are skipped.
fn build_item_labels(
    dataset: &Dataset,
    view: &ViewState,
    source: YDataSource,
    y_limits: LimitPlan,
) -> Vec<TextPrimitive> {
    if source != YDataSource::Explicit || !view.item_labels_visible {
        return Vec::new();
    }

    let span = match y_limits {
        LimitPlan::Fixed(limits) => limits.span(),
        LimitPlan::Auto => auto_y_span(dataset),
    };
    let nudge = span * ITEM_LABEL_NUDGE_RATIO;

    dataset
        .x_data
        .iter()
        .zip(dataset.y_data.iter())
        .zip(dataset.item_labels.iter())
        .filter(|((x_pair, y_pair), _)| {
            x_pair.iter().chain(y_pair.iter()).all(|v| v.is_finite())
        })
        .map(|((x_pair, y_pair), label)| TextPrimitive {
            text: label.clone(),
            x: x_pair[0],
            y: y_pair[0] - nudge,
            h_align: TextHAlign::Left,
            v_align: TextVAlign::Top,
        })
        .collect()
}

/// Span estimate for host-automatic limits: the finite y extent of the data.
fn auto_y_span(dataset: &Dataset) -> f64 {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in dataset.y_data.iter().flatten() {
        if value.is_finite() {
            min = min.min(*value);
            max = max.max(*value);
        }
    }
    if max > min { max - min } else { 1.0 }
}
