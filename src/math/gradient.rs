use super::grid::Grid2;

/// Differentiation axis of a sampled parameter grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along the columns of a row (the `u` direction).
    U,
    /// Along the rows of a column (the `v` direction).
    V,
}

/// Finite-difference partial derivative of a sampled field along one axis.
///
/// Uses a centered difference at interior samples and a one-sided
/// (forward/backward) difference at the first and last sample of the axis.
/// `step` must be the uniform spacing between consecutive samples along
/// that axis, taken from the actual generated parameter sequence rather
/// than recomputed from shape parameters.
///
/// The output has the same shape as the input. Requires at least two
/// samples along the differentiation axis.
#[must_use]
pub fn partial(field: &Grid2, step: f64, axis: Axis) -> Grid2 {
    let rows = field.rows();
    let cols = field.cols();
    match axis {
        Axis::U => Grid2::from_fn(rows, cols, |row, col| {
            if col == 0 {
                (field.get(row, 1) - field.get(row, 0)) / step
            } else if col == cols - 1 {
                (field.get(row, col) - field.get(row, col - 1)) / step
            } else {
                (field.get(row, col + 1) - field.get(row, col - 1)) / (2.0 * step)
            }
        }),
        Axis::V => Grid2::from_fn(rows, cols, |row, col| {
            if row == 0 {
                (field.get(1, col) - field.get(0, col)) / step
            } else if row == rows - 1 {
                (field.get(row, col) - field.get(row - 1, col)) / step
            } else {
                (field.get(row + 1, col) - field.get(row - 1, col)) / (2.0 * step)
            }
        }),
    }
}
