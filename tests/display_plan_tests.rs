use approx::assert_relative_eq;
use deltaplot::api::{ViewState, build_display_plan};
use deltaplot::core::{AxisLimits, ColorGradient, Dataset, LimitsMode};
use deltaplot::render::{GridAxes, LimitPlan, Marker, TextHAlign, TextVAlign, TickPlan};

fn labels_mode_dataset() -> Dataset {
    Dataset::from_x(vec![[10.0, 15.0], [20.0, 25.0], [30.0, 35.0]])
}

fn explicit_dataset() -> Dataset {
    Dataset::from_xy(
        vec![[10.0, 15.0], [20.0, 25.0]],
        vec![[1.0, 2.0], [3.0, 4.0]],
    )
}

#[test]
fn item_labels_mode_fixes_ticks_and_centers_limits() {
    let dataset = labels_mode_dataset();
    let plan = build_display_plan(
        &dataset,
        &ViewState::default(),
        &ColorGradient::default(),
        Marker::None,
    );

    match &plan.y_ticks {
        TickPlan::Fixed { positions, labels } => {
            assert_eq!(positions, &vec![1.0, 2.0, 3.0]);
            assert_eq!(labels, &vec!["1", "2", "3"]);
        }
        TickPlan::Auto => panic!("expected fixed ticks in item-labels mode"),
    }

    match plan.y_limits {
        LimitPlan::Fixed(limits) => {
            assert_relative_eq!(limits.lower, 0.5);
            assert_relative_eq!(limits.upper, 3.5);
        }
        LimitPlan::Auto => panic!("expected centered limits in item-labels mode"),
    }

    assert_eq!(plan.grid, GridAxes::XOnly);
    assert!(plan.item_labels.is_empty());
}

#[test]
fn explicit_mode_leaves_ticks_and_limits_to_the_host() {
    let dataset = explicit_dataset();
    let plan = build_display_plan(
        &dataset,
        &ViewState::default(),
        &ColorGradient::default(),
        Marker::None,
    );

    assert_eq!(plan.y_ticks, TickPlan::Auto);
    assert_eq!(plan.y_limits, LimitPlan::Auto);
    assert_eq!(plan.grid, GridAxes::Both);
}

#[test]
fn manual_limits_take_priority_over_label_centering() {
    let dataset = labels_mode_dataset();
    let view = ViewState {
        y_limits_mode: LimitsMode::Manual,
        manual_y_limits: Some(AxisLimits::new(-2.0, 12.0).expect("valid limits")),
        ..ViewState::default()
    };
    let plan = build_display_plan(&dataset, &view, &ColorGradient::default(), Marker::None);

    match plan.y_limits {
        LimitPlan::Fixed(limits) => {
            assert_relative_eq!(limits.lower, -2.0);
            assert_relative_eq!(limits.upper, 12.0);
        }
        LimitPlan::Auto => panic!("manual limits should win"),
    }
}

#[test]
fn grid_visibility_off_disables_both_axes() {
    let view = ViewState {
        grid_visible: false,
        ..ViewState::default()
    };

    for dataset in [labels_mode_dataset(), explicit_dataset()] {
        let plan = build_display_plan(&dataset, &view, &ColorGradient::default(), Marker::None);
        assert_eq!(plan.grid, GridAxes::None);
    }
}

#[test]
fn legend_always_carries_two_endpoint_entries() {
    let gradient = ColorGradient::default();

    for dataset in [Dataset::default(), labels_mode_dataset(), explicit_dataset()] {
        let plan = build_display_plan(&dataset, &ViewState::default(), &gradient, Marker::None);
        assert_eq!(plan.legend.len(), 2);
        assert_eq!(plan.legend[0].label, "Start");
        assert_eq!(plan.legend[1].label, "End");
        assert_eq!(plan.legend[0].swatch, gradient.start_color());
        assert_eq!(plan.legend[1].swatch, gradient.end_color());
    }
}

#[test]
fn legend_swatches_get_a_visible_marker_even_without_segment_markers() {
    let plan = build_display_plan(
        &explicit_dataset(),
        &ViewState::default(),
        &ColorGradient::default(),
        Marker::None,
    );
    assert_eq!(plan.legend[0].marker, Marker::Circle);

    let plan = build_display_plan(
        &explicit_dataset(),
        &ViewState::default(),
        &ColorGradient::default(),
        Marker::Diamond,
    );
    assert_eq!(plan.legend[0].marker, Marker::Diamond);
}

#[test]
fn item_labels_anchor_at_start_point_with_downward_nudge() {
    let dataset = explicit_dataset();
    let view = ViewState {
        y_limits_mode: LimitsMode::Manual,
        manual_y_limits: Some(AxisLimits::new(0.0, 10.0).expect("valid limits")),
        ..ViewState::default()
    };
    let plan = build_display_plan(&dataset, &view, &ColorGradient::default(), Marker::None);

    assert_eq!(plan.item_labels.len(), 2);
    let first = &plan.item_labels[0];
    assert_eq!(first.text, "1");
    assert_relative_eq!(first.x, 10.0);
    // 1% of the manual span of 10.
    assert_relative_eq!(first.y, 1.0 - 0.1);
    assert_eq!(first.h_align, TextHAlign::Left);
    assert_eq!(first.v_align, TextVAlign::Top);
}

#[test]
fn item_labels_skip_non_finite_items_and_hidden_state() {
    let dataset = Dataset::from_xy(
        vec![[10.0, 15.0], [f64::NAN, 25.0]],
        vec![[1.0, 2.0], [3.0, 4.0]],
    );
    let plan = build_display_plan(
        &dataset,
        &ViewState::default(),
        &ColorGradient::default(),
        Marker::None,
    );
    assert_eq!(plan.item_labels.len(), 1);

    let hidden = ViewState {
        item_labels_visible: false,
        ..ViewState::default()
    };
    let plan = build_display_plan(&dataset, &hidden, &ColorGradient::default(), Marker::None);
    assert!(plan.item_labels.is_empty());
}

#[test]
fn size_mismatch_degrades_to_a_blank_plan() {
    let dataset = Dataset {
        x_data: vec![[1.0, 2.0], [3.0, 4.0]],
        y_data: vec![[1.0, 2.0]],
        item_labels: vec!["1".to_owned(), "2".to_owned()],
    };
    let plan = build_display_plan(
        &dataset,
        &ViewState::default(),
        &ColorGradient::default(),
        Marker::None,
    );

    assert!(plan.degraded);
    assert_eq!(plan.y_ticks, TickPlan::Auto);
    assert_eq!(plan.grid, GridAxes::None);
    assert!(plan.item_labels.is_empty());
    // The endpoint legend is item-count independent and survives the degrade.
    assert_eq!(plan.legend.len(), 2);
}

#[test]
fn recomputing_the_plan_is_idempotent() {
    let dataset = explicit_dataset();
    let view = ViewState::default();
    let gradient = ColorGradient::default();

    let first = build_display_plan(&dataset, &view, &gradient, Marker::Circle);
    let second = build_display_plan(&dataset, &view, &gradient, Marker::Circle);
    assert_eq!(first, second);
}
