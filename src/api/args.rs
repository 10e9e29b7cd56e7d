use indexmap::IndexMap;

use crate::core::{Color, Dataset};
use crate::error::{PlotError, PlotResult};
use crate::render::Marker;

/// Opaque handle to a host axes container, stripped from the argument list
/// and passed through to the host framework untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxesTarget(pub u64);

/// One positional constructor argument.
///
/// The original construction API is an untagged heterogeneous list; this
/// enum makes each shape explicit so the matchers below can fully accept or
/// reject without partially consuming state.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotArg {
    /// Numeric column vector.
    Numbers(Vec<f64>),
    /// Coordinate pair rows, used by matrix-valued option values.
    Pairs(Vec<[f64; 2]>),
    /// Text vector: item labels or a textual option value.
    Text(Vec<String>),
    Scalar(f64),
    Flag(bool),
    Colors(Vec<Color>),
    Marker(Marker),
    /// Option name opening a name/value pair.
    Name(String),
    /// Leading target container handle.
    Target(AxesTarget),
}

/// Canonical output of the argument normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedArgs {
    pub target: Option<AxesTarget>,
    pub dataset: Dataset,
    /// Name/value options in application order.
    pub options: IndexMap<String, PlotArg>,
}

/// Parses the flexible positional argument list into canonical fields.
///
/// Matchers run in documented precedence order:
/// 1. a leading [`PlotArg::Target`] is stripped and passed through;
/// 2. exactly two leading numeric vectors match `(x1, x2)`;
/// 3. exactly four leading numeric vectors match `(x1, y1, x2, y2)`;
/// 4. a trailing text vector is consumed as item labels iff the leftover
///    argument count is odd (the inherited heuristic: an odd leftover signals
///    one extra positional argument ahead of the name/value pairs);
/// 5. everything else must be name/value pairs.
pub fn normalize_args(args: Vec<PlotArg>) -> PlotResult<NormalizedArgs> {
    let mut rest = args.as_slice();

    let target = match rest.first() {
        Some(PlotArg::Target(handle)) => {
            rest = &rest[1..];
            Some(*handle)
        }
        _ => None,
    };

    let numeric_run = rest
        .iter()
        .take_while(|arg| matches!(arg, PlotArg::Numbers(_)))
        .count();

    fn numeric_at<'a>(rest: &'a [PlotArg], index: usize) -> &'a [f64] {
        match &rest[index] {
            PlotArg::Numbers(values) => values,
            _ => unreachable!("index is inside the leading numeric run"),
        }
    }
    let numeric = |index: usize| numeric_at(rest, index);

    let mut dataset = match numeric_run {
        0 => Dataset::default(),
        2 => {
            let (x1, x2) = (numeric(0), numeric(1));
            if x1.len() != x2.len() {
                return Err(PlotError::MalformedInput(format!(
                    "`x1` and `x2` must have equal lengths (got {} and {})",
                    x1.len(),
                    x2.len()
                )));
            }
            Dataset::from_x(zip_pairs(x1, x2))
        }
        4 => {
            let (x1, y1, x2, y2) = (numeric(0), numeric(1), numeric(2), numeric(3));
            for (name, vector) in [("y1", y1), ("x2", x2), ("y2", y2)] {
                if vector.len() != x1.len() {
                    return Err(PlotError::MalformedInput(format!(
                        "`x1` and `{name}` must have equal lengths (got {} and {})",
                        x1.len(),
                        vector.len()
                    )));
                }
            }
            Dataset::from_xy(zip_pairs(x1, x2), zip_pairs(y1, y2))
        }
        other => {
            return Err(PlotError::MalformedInput(format!(
                "expected two (x1, x2) or four (x1, y1, x2, y2) numeric vectors, got {other}"
            )));
        }
    };
    rest = &rest[numeric_run..];

    // Odd leftover count signals one trailing positional argument (labels)
    // ahead of the name/value pairs. A labels argument followed by an even
    // tail is indistinguishable from a name/value list and is not consumed.
    if rest.len() % 2 == 1 {
        if let Some(PlotArg::Text(labels)) = rest.first() {
            if labels.len() != dataset.len() {
                return Err(PlotError::MalformedInput(format!(
                    "item labels length {} does not match item count {}",
                    labels.len(),
                    dataset.len()
                )));
            }
            dataset.item_labels = labels.clone();
            rest = &rest[1..];
        }
    }

    let mut options = IndexMap::new();
    let mut pairs = rest.chunks_exact(2);
    for pair in &mut pairs {
        let name = match &pair[0] {
            PlotArg::Name(name) => name.clone(),
            other => {
                return Err(PlotError::MalformedInput(format!(
                    "expected an option name, got {other:?}"
                )));
            }
        };
        match &pair[1] {
            PlotArg::Name(_) | PlotArg::Target(_) => {
                return Err(PlotError::MalformedInput(format!(
                    "option `{name}` is missing a value"
                )));
            }
            value => {
                options.insert(name, value.clone());
            }
        }
    }
    if !pairs.remainder().is_empty() {
        return Err(PlotError::MalformedInput(format!(
            "dangling argument after name/value pairs: {:?}",
            pairs.remainder()[0]
        )));
    }

    Ok(NormalizedArgs {
        target,
        dataset,
        options,
    })
}

fn zip_pairs(first: &[f64], second: &[f64]) -> Vec<[f64; 2]> {
    first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| [*a, *b])
        .collect()
}
