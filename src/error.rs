//! Error types.
use thiserror::Error;

use crate::Point;

/// Errors that can occur while building a permutation from cycles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// No cycle was given, so the size of the permutation is undefined.
    #[error("A permutation needs at least one cycle.")]
    NoCycles,
    /// A cycle without any points.
    #[error("Cycle {index} is empty.")]
    EmptyCycle { index: usize },
    /// Points are numbered starting at 1.
    #[error("Cycle {index} contains the point 0, points start at 1.")]
    ZeroPoint { index: usize },
    /// A cycle visiting the same point twice does not describe a bijection.
    #[error("Cycle {index} contains the point {point} more than once.")]
    RepeatedPoint { index: usize, point: Point },
}

/// A point outside of the domain of a permutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{point} not in permutation. Must be between 1 and {size}.")]
pub struct RangeError {
    /// The offending point.
    pub point: Point,
    /// Largest valid point.
    pub size: usize,
}

/// Exponents that [`Permutation::pow`][crate::Permutation::pow] does not support.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PowerError {
    #[error("Negative exponents are not supported.")]
    NegativeExponent,
    #[error("Exponent does not fit into usize.")]
    ExponentTooLarge,
}

/// Errors while reading a permutation from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected {found:?} at position {position}.")]
    UnexpectedChar { position: usize, found: char },
    #[error("Unexpected end of input.")]
    UnexpectedEnd,
    #[error("Could not interpret {0:?} as a point.")]
    InvalidPoint(String),
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}
