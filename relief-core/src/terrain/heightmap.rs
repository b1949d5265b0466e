//! The produced height grid.

use std::slice::ChunksExact;

/// A square grid of scaled height samples.
///
/// Storage is row-major and y-major: the cell at grid coordinates
/// `(x, y)` lives at `data[y * resolution + x]`. Samples are stored as
/// `f32`; all arithmetic that produced them ran in `f64` and only the
/// final value is narrowed.
///
/// Values are nominally `noise * height_multiplier / vertical_scale` with
/// noise in `[0, 1]`, but the octave sum is unclamped, so settings with an
/// amplitude sum above 1 may push cells slightly past the nominal bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    resolution: usize,
    data: Vec<f32>,
}

impl Heightmap {
    /// Wrap a finished row-major buffer. Generation is the only producer,
    /// so the length is a structural invariant rather than a user error.
    pub(super) fn from_raw(resolution: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), resolution * resolution);
        Self { resolution, data }
    }

    /// Side length of the grid, in cells.
    #[must_use]
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Height at grid coordinates `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is `resolution` or beyond.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(
            x < self.resolution && y < self.resolution,
            "cell ({x}, {y}) outside a {res}x{res} grid",
            res = self.resolution
        );
        self.data[y * self.resolution + x]
    }

    /// Iterate the grid row by row, from `y = 0` upward.
    #[must_use]
    pub fn rows(&self) -> ChunksExact<'_, f32> {
        self.data.chunks_exact(self.resolution)
    }

    /// Borrow the raw row-major samples.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume the grid into its raw row-major buffer, for hand-off to
    /// renderers or engines that want a bare `Vec<f32>`.
    #[must_use]
    pub fn into_raw(self) -> Vec<f32> {
        self.data
    }
}
