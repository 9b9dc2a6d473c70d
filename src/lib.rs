// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `ndreduce` crate provides [`Array`], a dense rectangular container of
//! numeric values, together with the aggregation operations that collapse it:
//! axis-wise reductions (sum, product, min, max, any, all), summary statistics
//! (mean, variance, standard deviation) and rank statistics (median,
//! arbitrary percentile with linear interpolation).
//!
//! ## Highlights
//!
//! - Arrays own their elements in a flat row-major buffer and are immutable
//!   after construction; every reduction allocates a fresh, smaller array.
//! - Reducing names the axes that *collapse* (the ones that disappear from
//!   the output shape), not the axes that are kept. Reducing over all axes
//!   produces a rank-0 array, which converts to a bare element with
//!   [`Array::into_scalar`].
//! - Missing values are IEEE NaN, handled by an explicit [`NanPolicy`]:
//!   `Propagate` makes any NaN in a reduction group poison that group's
//!   result (including for `min`/`max`, where naive `<`/`>` comparisons
//!   would silently ignore it), while `Skip` excludes NaN entries and
//!   adjusts the effective count.
//! - Contract violations (axis out of bounds, percentile out of `[0, 100]`,
//!   empty `min`/`max`, a degenerate variance divisor) surface as
//!   [`ReduceError`] values carrying enough context to diagnose the call.
//!
//! ## Example
//!
//! ```
//! use ndreduce::{array, Axis};
//!
//! let a = array![[9., 2., 1., 0.],
//!                [4., 7., 3., 3.],
//!                [1., 1., 9., 8.]];
//!
//! // Axis 0 collapses: one minimum per column.
//! let col_min = a.min_axis(Axis(0)).unwrap();
//! assert_eq!(col_min, array![1., 1., 1., 0.]);
//!
//! // Axis 1 collapses: one maximum per row.
//! let row_max = a.max_axis(Axis(1)).unwrap();
//! assert_eq!(row_max, array![9., 7., 9.]);
//!
//! assert_eq!(a.sum(), 48.);
//! ```

mod array_approx;
mod arrayformat;
mod arraytraits;
pub mod dimension;
mod elements;
mod error;
mod free_functions;
mod histogram;
mod impl_constructors;
mod impl_methods;
mod impl_numeric;
mod impl_rank;
mod impl_reduce;
mod indexes;
mod linspace;
mod numeric_util;
mod ops;

/// Array index type.
pub type Ix = usize;

pub use crate::dimension::Axis;
pub use crate::elements::{Element, ReduceElem};
pub use crate::error::{ErrorKind, ReduceError};
pub use crate::free_functions::{arr0, arr1, arr2, arr3};
pub use crate::histogram::histogram;
pub use crate::indexes::{indices, Indices};
pub use crate::linspace::{linspace, range, Linspace};
pub use crate::ops::{NanPolicy, ReduceOp};

mod imp_prelude {
    pub use crate::dimension;
    pub use crate::elements::{Element, ReduceElem};
    pub(crate) use crate::error::{self, ErrorKind, ReduceError};
    pub use crate::ops::{NanPolicy, ReduceOp};
    pub use crate::{Array, Axis, Ix};
}

/// A dense, rectangular, owned array of elements of type `A`.
///
/// The shape is an ordered sequence of axis extents; the number of axes is
/// the array's rank (rank 0 is a scalar holding exactly one element).
/// Elements are stored in one flat buffer in row-major order (the last axis
/// varies fastest), and the buffer length always equals the product of the
/// extents.
///
/// Arrays are constructed by [`Array::from_shape_vec`] and friends, by the
/// [`array!`] macro, or as the output of a reduction. They are not mutated
/// afterwards: reductions read their input and allocate a new output.
///
/// ```
/// use ndreduce::Array;
///
/// let a = Array::from_shape_vec(&[2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(a.shape(), &[2, 3]);
/// assert_eq!(a[[1, 0]], 4);
/// ```
#[derive(Clone)]
pub struct Array<A> {
    /// Extent of each axis; `dim.len()` is the rank.
    dim: Box<[Ix]>,
    /// The elements, in row-major order. `data.len() == dim.iter().product()`.
    data: Vec<A>,
}
