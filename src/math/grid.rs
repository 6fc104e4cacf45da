/// A dense row-major 2D scalar field.
///
/// Rows index the `v` samples of a parameter grid, columns the `u` samples.
/// Insertion order is significant: entries adjacent in storage are
/// geometrically adjacent, which finite differencing relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2 {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid2 {
    /// Builds a grid by evaluating `f(row, col)` at every cell.
    #[must_use]
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { rows, cols, data }
    }

    /// Number of rows (`v` samples).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`u` samples).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        self.data[row * self.cols + col]
    }

    /// Row-major view of the underlying values, for external collaborators
    /// (e.g. handing coordinates to a plotting backend).
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
