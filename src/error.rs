//! Error types for plane fitting and point input.

use std::io;
use thiserror::Error;

/// Result type for fitting operations
pub type FitResult<T> = Result<T, FitError>;

#[derive(Error, Debug)]
pub enum FitError {
    /// The normal equations need at least as many points as unknowns.
    #[error("Too few points: at least {required} required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("Row {row} has {actual} columns, expected {expected}")]
    WrongColumnCount { row: usize, expected: usize, actual: usize },

    #[error("Row {row} contains a non-finite value")]
    NonFiniteValue { row: usize },

    /// AᵀA is (numerically) singular: the (x, y) projections of the
    /// points are collinear or coincide.
    #[error("Singular system: points do not span a plane in x and y")]
    SingularSystem,

    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Unable to read input: {0}")]
    Io(#[from] io::Error),
}
