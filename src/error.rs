use thiserror::Error;

/// Top-level error type for the Möbius geometry kernel.
///
/// All computation downstream of construction is a total function over
/// numeric inputs, so errors only arise when validating shape parameters
/// and mesh resolution up front.
#[derive(Debug, Error)]
pub enum MobiusError {
    #[error("parameter {parameter} = {value} is invalid: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("resolution n = {n} is insufficient: at least 2 samples per axis are required")]
    InsufficientResolution { n: usize },
}

/// Convenience type alias for results using [`MobiusError`].
pub type Result<T> = std::result::Result<T, MobiusError>;
