use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{
    AxisLimits, Color, ColorGradient, Dataset, GeometryBuffers, LimitsMode, YDataSource,
    build_geometry, dataset::default_item_labels,
};
use crate::error::{PlotError, PlotResult};
use crate::render::{AxesPlan, LimitPlan, Marker, PatchPrimitive, RenderSurface, SurfaceFrame};

use super::DeltaPlotConfig;
use super::args::{AxesTarget, PlotArg, normalize_args};
use super::display_plan::{DisplayPlan, ViewState, build_display_plan};
use super::snapshot::WidgetSnapshot;
use super::validation::{validate_endpoint_labels, validate_line_width};

/// Delta-plot widget facade consumed by host applications.
///
/// Holds the canonical dataset and view state, recomputes geometry and the
/// display plan on every [`DeltaPlot::refresh`], and applies the resulting
/// frame to the injected render surface. All derived outputs are pure
/// functions of current state; refreshing twice on unchanged state applies
/// bit-identical frames.
pub struct DeltaPlot<S: RenderSurface> {
    surface: S,
    target: Option<AxesTarget>,
    dataset: Dataset,
    view: ViewState,
    color_order: SmallVec<[Color; 4]>,
    gradient: ColorGradient,
    marker: Marker,
    line_width: f64,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl<S: RenderSurface> DeltaPlot<S> {
    /// Constructs the widget from the flexible positional argument list.
    pub fn new(surface: S, args: Vec<PlotArg>) -> PlotResult<Self> {
        let normalized = normalize_args(args)?;
        let mut widget = Self::with_config(surface, DeltaPlotConfig::default())?;
        widget.target = normalized.target;
        widget.dataset = normalized.dataset;
        for (name, value) in normalized.options {
            widget.apply_option(&name, value)?;
        }
        debug!(
            items = widget.dataset.len(),
            source = ?widget.y_data_source(),
            "constructed delta plot"
        );
        Ok(widget)
    }

    /// Constructs the widget from a typed configuration record.
    pub fn with_config(surface: S, config: DeltaPlotConfig) -> PlotResult<Self> {
        if !config.y_data.is_empty() && config.y_data.len() != config.x_data.len() {
            return Err(PlotError::MalformedInput(format!(
                "`x_data` and `y_data` must have equal heights (got {} and {})",
                config.x_data.len(),
                config.y_data.len()
            )));
        }
        let item_labels = match config.item_labels {
            Some(labels) => {
                if labels.len() != config.x_data.len() {
                    return Err(PlotError::MalformedInput(format!(
                        "item labels length {} does not match item count {}",
                        labels.len(),
                        config.x_data.len()
                    )));
                }
                labels
            }
            None => default_item_labels(config.x_data.len()),
        };
        validate_endpoint_labels(&config.endpoint_labels)?;
        let line_width = validate_line_width(config.line_width)?;

        let mut widget = Self {
            surface,
            target: None,
            dataset: Dataset {
                x_data: config.x_data,
                y_data: config.y_data,
                item_labels,
            },
            view: ViewState {
                grid_visible: config.grid_visible,
                item_labels_visible: config.item_labels_visible,
                endpoint_labels: config.endpoint_labels,
                ..ViewState::default()
            },
            color_order: SmallVec::new(),
            gradient: ColorGradient::default(),
            marker: config.marker,
            line_width,
            title: config.title,
            x_label: config.x_label,
            y_label: config.y_label,
        };
        widget.set_color_order(&config.color_order);
        Ok(widget)
    }

    // ----- data properties -----

    pub fn set_x_data(&mut self, x_data: Vec<[f64; 2]>) {
        debug!(items = x_data.len(), "set x data");
        self.dataset.x_data = x_data;
        self.warn_on_size_mismatch("set_x_data");
    }

    /// Assigning non-empty data switches the widget to explicit-y mode;
    /// assigning empty data switches back to item-label ordering.
    pub fn set_y_data(&mut self, y_data: Vec<[f64; 2]>) {
        debug!(items = y_data.len(), "set y data");
        self.dataset.y_data = y_data;
        self.warn_on_size_mismatch("set_y_data");
    }

    pub fn set_item_labels(&mut self, item_labels: Vec<String>) {
        debug!(items = item_labels.len(), "set item labels");
        self.dataset.item_labels = item_labels;
        self.warn_on_size_mismatch("set_item_labels");
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Derived data-source tag; recomputed from the dataset, never stored.
    #[must_use]
    pub fn y_data_source(&self) -> YDataSource {
        self.dataset.y_data_source()
    }

    // ----- style properties -----

    /// Replaces the color order and rebuilds the gradient.
    ///
    /// Invalid color specs are non-fatal: the previous valid palette is
    /// retained and a warning is emitted. An empty order restores the
    /// default palette.
    pub fn set_color_order(&mut self, order: &[Color]) {
        for color in order {
            if let Err(err) = color.validate() {
                warn!(error = %err, "invalid color order; keeping previous palette");
                return;
            }
        }
        self.color_order = SmallVec::from_slice(order);
        self.gradient = ColorGradient::from_color_order(order);
    }

    #[must_use]
    pub fn color_order(&self) -> &[Color] {
        &self.color_order
    }

    #[must_use]
    pub fn gradient(&self) -> &ColorGradient {
        &self.gradient
    }

    pub fn set_marker(&mut self, marker: Marker) {
        self.marker = marker;
    }

    #[must_use]
    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn set_line_width(&mut self, line_width: f64) -> PlotResult<()> {
        self.line_width = validate_line_width(line_width)?;
        Ok(())
    }

    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn set_endpoint_labels(&mut self, labels: [String; 2]) -> PlotResult<()> {
        validate_endpoint_labels(&labels)?;
        self.view.endpoint_labels = labels;
        Ok(())
    }

    #[must_use]
    pub fn endpoint_labels(&self) -> &[String; 2] {
        &self.view.endpoint_labels
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        self.view.grid_visible = visible;
    }

    #[must_use]
    pub fn grid_visible(&self) -> bool {
        self.view.grid_visible
    }

    pub fn set_item_labels_visible(&mut self, visible: bool) {
        self.view.item_labels_visible = visible;
    }

    #[must_use]
    pub fn item_labels_visible(&self) -> bool {
        self.view.item_labels_visible
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn set_x_label(&mut self, label: Option<String>) {
        self.x_label = label;
    }

    pub fn set_y_label(&mut self, label: Option<String>) {
        self.y_label = label;
    }

    #[must_use]
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    #[must_use]
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Convenience passthrough mirroring the host `title(...)` call.
    pub fn title(&mut self, text: impl Into<String>) {
        self.title = Some(text.into());
    }

    // ----- limits -----

    /// Fixes the x-axis bounds.
    pub fn xlim(&mut self, lower: f64, upper: f64) -> PlotResult<()> {
        self.view.manual_x_limits = Some(AxisLimits::new(lower, upper)?);
        Ok(())
    }

    /// Fixes the y-axis bounds and switches the y axis to manual mode.
    pub fn ylim(&mut self, lower: f64, upper: f64) -> PlotResult<()> {
        self.view.manual_y_limits = Some(AxisLimits::new(lower, upper)?);
        self.view.y_limits_mode = LimitsMode::Manual;
        debug!(lower, upper, "set manual y limits");
        Ok(())
    }

    /// Returns the y axis to automatic limit resolution.
    pub fn ylim_auto(&mut self) {
        self.view.y_limits_mode = LimitsMode::Auto;
        self.view.manual_y_limits = None;
    }

    /// Captures a host-side interactive limit change (pan/zoom) into manual
    /// limit mode, exactly like an explicit `ylim` call.
    pub fn observe_y_limits_changed(&mut self, lower: f64, upper: f64) -> PlotResult<()> {
        self.view.manual_y_limits = Some(AxisLimits::new(lower, upper)?);
        self.view.y_limits_mode = LimitsMode::Manual;
        trace!(lower, upper, "captured interactive y limits");
        Ok(())
    }

    /// Resolved x bounds as of the current state.
    #[must_use]
    pub fn x_limits(&self) -> LimitPlan {
        self.display_plan().x_limits
    }

    /// Resolved y bounds as of the current state (manual, label-centered, or
    /// host-automatic).
    #[must_use]
    pub fn y_limits(&self) -> LimitPlan {
        self.display_plan().y_limits
    }

    #[must_use]
    pub fn y_limits_mode(&self) -> LimitsMode {
        self.view.y_limits_mode
    }

    #[must_use]
    pub fn axes_target(&self) -> Option<AxesTarget> {
        self.target
    }

    // ----- derived outputs -----

    #[must_use]
    pub fn geometry(&self) -> GeometryBuffers {
        build_geometry(&self.dataset, self.dataset.y_data_source())
    }

    #[must_use]
    pub fn display_plan(&self) -> DisplayPlan {
        build_display_plan(&self.dataset, &self.view, &self.gradient, self.marker)
    }

    /// Materializes the full scene: axes plan, one patch request, the two
    /// endpoint legend entries, and item-label text requests.
    #[must_use]
    pub fn build_frame(&self) -> SurfaceFrame {
        let geometry = self.geometry();
        let plan = self.display_plan();
        SurfaceFrame {
            axes: AxesPlan {
                title: self.title.clone(),
                x_label: self.x_label.clone(),
                y_label: self.y_label.clone(),
                x_limits: plan.x_limits,
                y_limits: plan.y_limits,
                y_ticks: plan.y_ticks,
                grid: plan.grid,
            },
            colormap: plan.colormap,
            patch: PatchPrimitive {
                patch_x: geometry.patch_x,
                patch_y: geometry.patch_y,
                face_vertex_colors: geometry.face_vertex_colors,
                marker: self.marker,
                line_width: self.line_width,
            },
            legend: plan.legend,
            labels: plan.item_labels,
        }
    }

    /// Recomputes derived state and applies it to the render surface.
    pub fn refresh(&mut self) -> PlotResult<()> {
        let frame = self.build_frame();
        self.surface.apply(&frame)
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    // ----- snapshot -----

    #[must_use]
    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            x_limits: self.view.manual_x_limits,
            y_limits: self.view.manual_y_limits,
            y_limits_mode: self.view.y_limits_mode,
            y_data_source: Some(self.dataset.y_data_source()),
            color_order: self.color_order.to_vec(),
        }
    }

    /// Re-applies a persisted snapshot; absent fields leave current state.
    ///
    /// Deserialized limit pairs are re-validated before anything is applied
    /// so a failed restore leaves prior valid state untouched.
    pub fn restore_snapshot(&mut self, snapshot: &WidgetSnapshot) -> PlotResult<()> {
        let x_limits = snapshot
            .x_limits
            .map(|limits| AxisLimits::new(limits.lower, limits.upper))
            .transpose()?;
        let y_limits = snapshot
            .y_limits
            .map(|limits| AxisLimits::new(limits.lower, limits.upper))
            .transpose()?;
        if let Some(limits) = x_limits {
            self.view.manual_x_limits = Some(limits);
        }
        if let Some(limits) = y_limits {
            self.view.manual_y_limits = Some(limits);
        }
        self.view.y_limits_mode = snapshot.y_limits_mode;
        if self.view.y_limits_mode == LimitsMode::Manual && self.view.manual_y_limits.is_none() {
            warn!("snapshot requested manual y limits without a stored pair; staying automatic");
            self.view.y_limits_mode = LimitsMode::Auto;
        }
        if let Some(recorded) = snapshot.y_data_source {
            // The live tag is derived from the dataset; a disagreement means
            // the snapshot was taken against different data.
            let derived = self.dataset.y_data_source();
            if recorded != derived {
                warn!(
                    ?recorded,
                    ?derived,
                    "snapshot y data source disagrees with current dataset"
                );
            }
        }
        if !snapshot.color_order.is_empty() {
            self.set_color_order(&snapshot.color_order);
        }
        Ok(())
    }

    // ----- internals -----

    fn apply_option(&mut self, name: &str, value: PlotArg) -> PlotResult<()> {
        match name {
            "XData" => self.set_x_data(expect_pairs(name, value)?),
            "YData" => self.set_y_data(expect_pairs(name, value)?),
            "ItemLabels" => self.set_item_labels(expect_text(name, value)?),
            "EndPointLabels" => {
                let labels = expect_text(name, value)?;
                let [first, second]: [String; 2] = labels.try_into().map_err(|_| {
                    PlotError::MalformedInput(format!(
                        "option `{name}` expects exactly two display names"
                    ))
                })?;
                self.set_endpoint_labels([first, second])?;
            }
            "Title" => self.title = Some(expect_scalar_text(name, value)?),
            "XLabel" => self.x_label = Some(expect_scalar_text(name, value)?),
            "YLabel" => self.y_label = Some(expect_scalar_text(name, value)?),
            "ItemLabelsVisible" => self.view.item_labels_visible = expect_flag(name, value)?,
            "GridVisible" => self.view.grid_visible = expect_flag(name, value)?,
            "ColorOrder" => match value {
                PlotArg::Colors(colors) => self.set_color_order(&colors),
                PlotArg::Text(specs) => self.apply_color_specs(&specs),
                other => {
                    return Err(PlotError::MalformedInput(format!(
                        "option `{name}` expects a color list, got {other:?}"
                    )));
                }
            },
            "Marker" => match value {
                PlotArg::Marker(marker) => self.marker = marker,
                PlotArg::Text(tokens) if tokens.len() == 1 => {
                    self.marker = Marker::from_token(&tokens[0])?;
                }
                other => {
                    return Err(PlotError::MalformedInput(format!(
                        "option `{name}` expects a marker, got {other:?}"
                    )));
                }
            },
            "LineWidth" => match value {
                PlotArg::Scalar(width) => self.set_line_width(width)?,
                other => {
                    return Err(PlotError::MalformedInput(format!(
                        "option `{name}` expects a positive number, got {other:?}"
                    )));
                }
            },
            other => {
                return Err(PlotError::MalformedInput(format!(
                    "unrecognized option name `{other}`"
                )));
            }
        }
        Ok(())
    }

    /// Unparseable specs keep the previous palette (non-fatal).
    fn apply_color_specs(&mut self, specs: &[String]) {
        let mut colors = Vec::with_capacity(specs.len());
        for spec in specs {
            match Color::parse(spec) {
                Ok(color) => colors.push(color),
                Err(err) => {
                    warn!(error = %err, "invalid color order; keeping previous palette");
                    return;
                }
            }
        }
        self.set_color_order(&colors);
    }

    fn warn_on_size_mismatch(&self, operation: &str) {
        if !self.dataset.sizes_agree() {
            warn!(
                operation,
                x_len = self.dataset.x_data.len(),
                y_len = self.dataset.y_data.len(),
                labels_len = self.dataset.item_labels.len(),
                "dataset sizes disagree; chart hidden until they agree again"
            );
        }
    }
}

fn expect_pairs(name: &str, value: PlotArg) -> PlotResult<Vec<[f64; 2]>> {
    match value {
        PlotArg::Pairs(pairs) => Ok(pairs),
        PlotArg::Numbers(values) if values.is_empty() => Ok(Vec::new()),
        other => Err(PlotError::MalformedInput(format!(
            "option `{name}` expects coordinate pair rows, got {other:?}"
        ))),
    }
}

fn expect_text(name: &str, value: PlotArg) -> PlotResult<Vec<String>> {
    match value {
        PlotArg::Text(text) => Ok(text),
        other => Err(PlotError::MalformedInput(format!(
            "option `{name}` expects text, got {other:?}"
        ))),
    }
}

fn expect_scalar_text(name: &str, value: PlotArg) -> PlotResult<String> {
    let mut text = expect_text(name, value)?;
    if text.len() != 1 {
        return Err(PlotError::MalformedInput(format!(
            "option `{name}` expects a single string"
        )));
    }
    Ok(text.remove(0))
}

fn expect_flag(name: &str, value: PlotArg) -> PlotResult<bool> {
    match value {
        PlotArg::Flag(flag) => Ok(flag),
        other => Err(PlotError::MalformedInput(format!(
            "option `{name}` expects a logical flag, got {other:?}"
        ))),
    }
}
