use deltaplot::PlotError;
use deltaplot::api::{AxesTarget, PlotArg, normalize_args};
use deltaplot::core::YDataSource;

#[test]
fn two_vector_shape_defaults_labels_and_index_ordering() {
    let normalized = normalize_args(vec![
        PlotArg::Numbers(vec![10.0, 20.0]),
        PlotArg::Numbers(vec![15.0, 25.0]),
    ])
    .expect("two-vector shape");

    assert_eq!(normalized.dataset.x_data, vec![[10.0, 15.0], [20.0, 25.0]]);
    assert!(normalized.dataset.y_data.is_empty());
    assert_eq!(normalized.dataset.item_labels, vec!["1", "2"]);
    assert_eq!(
        normalized.dataset.y_data_source(),
        YDataSource::ItemLabels
    );
    assert!(normalized.target.is_none());
    assert!(normalized.options.is_empty());
}

#[test]
fn four_vector_shape_uses_explicit_y() {
    let normalized = normalize_args(vec![
        PlotArg::Numbers(vec![1.0, 2.0]),
        PlotArg::Numbers(vec![10.0, 20.0]),
        PlotArg::Numbers(vec![3.0, 4.0]),
        PlotArg::Numbers(vec![30.0, 40.0]),
    ])
    .expect("four-vector shape");

    assert_eq!(normalized.dataset.x_data, vec![[1.0, 3.0], [2.0, 4.0]]);
    assert_eq!(normalized.dataset.y_data, vec![[10.0, 30.0], [20.0, 40.0]]);
    assert_eq!(normalized.dataset.y_data_source(), YDataSource::Explicit);
}

#[test]
fn trailing_text_with_odd_leftover_becomes_labels() {
    let normalized = normalize_args(vec![
        PlotArg::Numbers(vec![10.0, 20.0]),
        PlotArg::Numbers(vec![15.0, 25.0]),
        PlotArg::Text(vec!["alpha".to_owned(), "beta".to_owned()]),
        PlotArg::Name("GridVisible".to_owned()),
        PlotArg::Flag(false),
    ])
    .expect("labels plus one option pair");

    assert_eq!(normalized.dataset.item_labels, vec!["alpha", "beta"]);
    assert_eq!(normalized.options.len(), 1);
    assert_eq!(
        normalized.options.get("GridVisible"),
        Some(&PlotArg::Flag(false))
    );
}

#[test]
fn trailing_text_with_even_leftover_is_not_consumed_as_labels() {
    // The inherited heuristic: with an even leftover the text vector lands in
    // an option-name slot and the whole list is rejected.
    let result = normalize_args(vec![
        PlotArg::Numbers(vec![10.0, 20.0]),
        PlotArg::Numbers(vec![15.0, 25.0]),
        PlotArg::Text(vec!["alpha".to_owned(), "beta".to_owned()]),
        PlotArg::Name("GridVisible".to_owned()),
    ]);

    assert!(matches!(result, Err(PlotError::MalformedInput(_))));
}

#[test]
fn label_length_mismatch_is_rejected() {
    let result = normalize_args(vec![
        PlotArg::Numbers(vec![10.0, 20.0]),
        PlotArg::Numbers(vec![15.0, 25.0]),
        PlotArg::Text(vec!["only-one".to_owned()]),
    ]);

    match result {
        Err(PlotError::MalformedInput(message)) => {
            assert!(message.contains("item labels"), "unexpected: {message}");
        }
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

#[test]
fn coordinate_length_mismatch_names_the_pairing() {
    let result = normalize_args(vec![
        PlotArg::Numbers(vec![10.0, 20.0]),
        PlotArg::Numbers(vec![15.0]),
    ]);

    match result {
        Err(PlotError::MalformedInput(message)) => {
            assert!(message.contains("`x1` and `x2`"), "unexpected: {message}");
        }
        other => panic!("expected MalformedInput, got {other:?}"),
    }

    let result = normalize_args(vec![
        PlotArg::Numbers(vec![1.0, 2.0]),
        PlotArg::Numbers(vec![10.0, 20.0]),
        PlotArg::Numbers(vec![3.0, 4.0]),
        PlotArg::Numbers(vec![30.0]),
    ]);

    match result {
        Err(PlotError::MalformedInput(message)) => {
            assert!(message.contains("`y2`"), "unexpected: {message}");
        }
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

#[test]
fn odd_numeric_run_is_rejected() {
    for run in [1_usize, 3] {
        let args: Vec<PlotArg> = (0..run)
            .map(|_| PlotArg::Numbers(vec![1.0, 2.0]))
            .collect();
        assert!(
            matches!(normalize_args(args), Err(PlotError::MalformedInput(_))),
            "numeric run of {run} should be rejected"
        );
    }
}

#[test]
fn leading_target_is_stripped_and_passed_through() {
    let normalized = normalize_args(vec![
        PlotArg::Target(AxesTarget(7)),
        PlotArg::Numbers(vec![10.0]),
        PlotArg::Numbers(vec![15.0]),
    ])
    .expect("target plus two vectors");

    assert_eq!(normalized.target, Some(AxesTarget(7)));
    assert_eq!(normalized.dataset.len(), 1);
}

#[test]
fn empty_positional_list_yields_empty_dataset() {
    let normalized = normalize_args(vec![
        PlotArg::Name("Title".to_owned()),
        PlotArg::Text(vec!["configured later".to_owned()]),
    ])
    .expect("options only");

    assert!(normalized.dataset.is_empty());
    assert_eq!(normalized.options.len(), 1);
}

#[test]
fn options_preserve_application_order() {
    let normalized = normalize_args(vec![
        PlotArg::Numbers(vec![1.0]),
        PlotArg::Numbers(vec![2.0]),
        PlotArg::Name("Title".to_owned()),
        PlotArg::Text(vec!["t".to_owned()]),
        PlotArg::Name("GridVisible".to_owned()),
        PlotArg::Flag(true),
        PlotArg::Name("LineWidth".to_owned()),
        PlotArg::Scalar(3.0),
    ])
    .expect("ordered options");

    let names: Vec<&str> = normalized.options.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Title", "GridVisible", "LineWidth"]);
}

#[test]
fn option_name_without_value_is_rejected() {
    let result = normalize_args(vec![
        PlotArg::Numbers(vec![1.0]),
        PlotArg::Numbers(vec![2.0]),
        PlotArg::Name("GridVisible".to_owned()),
        PlotArg::Name("Title".to_owned()),
    ]);

    assert!(matches!(result, Err(PlotError::MalformedInput(_))));
}
