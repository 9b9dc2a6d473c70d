use std::error::Error;
use std::fmt;

use crate::Ix;

/// An error related to array shape, axis selection or an undefined
/// aggregation request.
#[derive(Clone, Debug, PartialEq)]
pub struct ReduceError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ReduceError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.repr
    }
}

/// Error code for an error related to array shape, axis selection or an
/// undefined aggregation request.
///
/// Every variant carries the offending values so that a failed call can be
/// diagnosed without re-deriving the caller's state. This enumeration is not
/// exhaustive.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Nested input rows of unequal length.
    JaggedInput {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },
    /// The number of elements does not match the product of the shape.
    IncompatibleShape {
        /// The requested shape.
        shape: Box<[Ix]>,
        /// The number of elements actually supplied.
        len: usize,
    },
    /// An axis index outside `[0, ndim)`.
    AxisOutOfBounds { axis: usize, ndim: usize },
    /// The same axis named more than once in one call.
    DuplicateAxis { axis: usize },
    /// An ordering or averaging reduction over a group with no elements;
    /// no identity element exists for it.
    EmptyReduction { op: &'static str },
    /// Variance or standard deviation requested with a divisor that is not
    /// positive after subtracting `ddof` from the element count.
    DegenerateVariance { count: usize, ddof: f64 },
    /// A percentile rank outside `[0, 100]`.
    QuantileOutOfRange { q: f64 },
    /// A histogram with zero bins.
    InvalidBinCount,
    /// `into_scalar` called on an array that is not rank 0.
    NotScalar { ndim: usize },
}

#[inline]
pub(crate) fn from_kind(repr: ErrorKind) -> ReduceError {
    ReduceError { repr }
}

#[inline]
pub(crate) fn empty_reduction(op: &'static str) -> ReduceError {
    from_kind(ErrorKind::EmptyReduction { op })
}

impl Error for ReduceError {}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.kind() {
            ErrorKind::JaggedInput { row, expected, got } => {
                write!(
                    f,
                    "jagged input: row {} has length {}, expected {}",
                    row, got, expected
                )
            }
            ErrorKind::IncompatibleShape { ref shape, len } => {
                write!(
                    f,
                    "incompatible shape {:?} for {} elements",
                    shape, len
                )
            }
            ErrorKind::AxisOutOfBounds { axis, ndim } => {
                write!(f, "axis {} is out of bounds for rank {}", axis, ndim)
            }
            ErrorKind::DuplicateAxis { axis } => {
                write!(f, "axis {} named more than once", axis)
            }
            ErrorKind::EmptyReduction { op } => {
                write!(f, "{} of an empty group is undefined", op)
            }
            ErrorKind::DegenerateVariance { count, ddof } => {
                write!(
                    f,
                    "variance divisor is not positive: count {} with ddof {}",
                    count, ddof
                )
            }
            ErrorKind::QuantileOutOfRange { q } => {
                write!(f, "percentile q={} is outside [0, 100]", q)
            }
            ErrorKind::InvalidBinCount => write!(f, "histogram needs at least one bin"),
            ErrorKind::NotScalar { ndim } => {
                write!(f, "expected a rank-0 array, got rank {}", ndim)
            }
        }
    }
}
