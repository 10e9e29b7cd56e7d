use crate::core::{Dataset, YDataSource};

/// Gradient index assigned to each segment's start vertex.
pub const START_COLOR_INDEX: u8 = 1;
/// Gradient index assigned to each segment's end vertex and break marker.
pub const END_COLOR_INDEX: u8 = 2;

/// Flat polyline buffers for one multi-segment patch draw call.
///
/// Layout is `[x1, x2, NaN, ...]` per item: the NaN is a polyline break
/// marker so every item renders as a disconnected segment. Buffer lengths are
/// always a multiple of 3. Empty buffers mean "nothing to draw".
#[derive(Debug, Clone, Default)]
pub struct GeometryBuffers {
    pub patch_x: Vec<f64>,
    pub patch_y: Vec<f64>,
    pub face_vertex_colors: Vec<u8>,
}

impl GeometryBuffers {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patch_x.is_empty()
    }

    /// Number of drawable segments encoded in the buffers.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.patch_x.len() / 3
    }

    /// Bit-exact comparison; `==` over the vertex buffers would be defeated
    /// by the NaN break markers.
    #[must_use]
    pub fn bitwise_eq(&self, other: &Self) -> bool {
        fn bits_eq(a: &[f64], b: &[f64]) -> bool {
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(lhs, rhs)| lhs.to_bits() == rhs.to_bits())
        }
        bits_eq(&self.patch_x, &other.patch_x)
            && bits_eq(&self.patch_y, &other.patch_y)
            && self.face_vertex_colors == other.face_vertex_colors
    }
}

/// Converts the canonical dataset into renderable segment buffers.
///
/// The function is deterministic and side-effect free so rendering and tests
/// consume the exact same geometry output. Items with a non-finite required
/// coordinate are excluded from the buffers but keep their original index:
/// in [`YDataSource::ItemLabels`] mode a surviving item at original position
/// `i` gets the synthesized y pair `(i, i)` (1-based, never renumbered after
/// filtering) so segments stay aligned with the label ticks.
#[must_use]
pub fn build_geometry(dataset: &Dataset, source: YDataSource) -> GeometryBuffers {
    if !dataset.sizes_agree() {
        return GeometryBuffers::default();
    }

    let mut buffers = GeometryBuffers {
        patch_x: Vec::with_capacity(dataset.len() * 3),
        patch_y: Vec::with_capacity(dataset.len() * 3),
        face_vertex_colors: Vec::with_capacity(dataset.len() * 3),
    };

    for (index, x_pair) in dataset.x_data.iter().enumerate() {
        let y_pair = match source {
            YDataSource::Explicit => dataset.y_data[index],
            YDataSource::ItemLabels => {
                let position = (index + 1) as f64;
                [position, position]
            }
        };

        if !item_is_drawable(*x_pair, y_pair, source) {
            continue;
        }

        buffers.patch_x.extend_from_slice(&[x_pair[0], x_pair[1], f64::NAN]);
        buffers.patch_y.extend_from_slice(&[y_pair[0], y_pair[1], f64::NAN]);
        buffers.face_vertex_colors.extend_from_slice(&[
            START_COLOR_INDEX,
            END_COLOR_INDEX,
            END_COLOR_INDEX,
        ]);
    }

    buffers
}

fn item_is_drawable(x_pair: [f64; 2], y_pair: [f64; 2], source: YDataSource) -> bool {
    let x_ok = x_pair[0].is_finite() && x_pair[1].is_finite();
    match source {
        // Synthesized y values are always finite.
        YDataSource::ItemLabels => x_ok,
        YDataSource::Explicit => x_ok && y_pair[0].is_finite() && y_pair[1].is_finite(),
    }
}
