pub mod args;
pub mod config;
pub mod display_plan;
pub mod snapshot;
mod validation;
pub mod widget;

pub use args::{AxesTarget, NormalizedArgs, PlotArg, normalize_args};
pub use config::DeltaPlotConfig;
pub use display_plan::{DisplayPlan, ViewState, build_display_plan};
pub use snapshot::{
    WIDGET_SNAPSHOT_JSON_SCHEMA_V1, WidgetSnapshot, WidgetSnapshotJsonContractV1,
};
pub use widget::DeltaPlot;
