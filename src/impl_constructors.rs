// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for ndreduce.

use num_traits::{Float, Zero};

use crate::imp_prelude::*;
use crate::indexes::Indices;
use crate::linspace;

impl<A> Array<A> {
    /// Create an array from a shape and a flat vector of elements in
    /// row-major order (no copying needed).
    ///
    /// **Errors** if the product of the shape does not equal the number of
    /// elements in `v`.
    ///
    /// ```
    /// use ndreduce::Array;
    ///
    /// let a = Array::from_shape_vec(&[2, 2], vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a.shape(), &[2, 2]);
    ///
    /// assert!(Array::from_shape_vec(&[2, 3], vec![1., 2., 3., 4.]).is_err());
    /// ```
    pub fn from_shape_vec(shape: &[Ix], v: Vec<A>) -> Result<Array<A>, ReduceError> {
        if dimension::size_of_checked(shape) != Some(v.len()) {
            return Err(error::from_kind(ErrorKind::IncompatibleShape {
                shape: shape.into(),
                len: v.len(),
            }));
        }
        Ok(Array::from_parts(shape.into(), v))
    }

    /// Create a one-dimensional array from a vector (no copying needed).
    pub fn from_vec(v: Vec<A>) -> Array<A> {
        let len = v.len();
        Array::from_parts(vec![len].into_boxed_slice(), v)
    }

    /// Create an array with copies of `elem` and the given shape.
    ///
    /// **Panics** if the number of elements in `shape` overflows `usize`.
    ///
    /// ```
    /// use ndreduce::{arr2, Array};
    ///
    /// let a = Array::from_elem(&[2, 2], 1.);
    /// assert_eq!(a, arr2(&[[1., 1.], [1., 1.]]));
    /// ```
    pub fn from_elem(shape: &[Ix], elem: A) -> Array<A>
    where
        A: Clone,
    {
        let size = size_checked_unwrap(shape);
        Array::from_parts(shape.into(), vec![elem; size])
    }

    /// Create an array of zeros with the given shape.
    ///
    /// **Panics** if the number of elements in `shape` overflows `usize`.
    pub fn zeros(shape: &[Ix]) -> Array<A>
    where
        A: Clone + Zero,
    {
        Array::from_elem(shape, A::zero())
    }

    /// Create an array with the given shape, calling `f` with each
    /// coordinate in row-major order.
    ///
    /// **Panics** if the number of elements in `shape` overflows `usize`.
    ///
    /// ```
    /// use ndreduce::{arr2, Array};
    ///
    /// let a = Array::from_shape_fn(&[2, 2], |ix| ix[0] * 10 + ix[1]);
    /// assert_eq!(a, arr2(&[[0, 1], [10, 11]]));
    /// ```
    pub fn from_shape_fn<F>(shape: &[Ix], mut f: F) -> Array<A>
    where
        F: FnMut(&[Ix]) -> A,
    {
        let size = size_checked_unwrap(shape);
        let mut v = Vec::with_capacity(size);
        for ix in Indices::new(shape) {
            v.push(f(&ix));
        }
        Array::from_parts(shape.into(), v)
    }

    /// Create a two-dimensional array from a sequence of rows.
    ///
    /// All rows must have the same length. An empty sequence of rows gives
    /// the empty array of shape `[0, 0]`.
    ///
    /// **Errors** with a jagged-input kind if a row's length differs from
    /// the first row's.
    ///
    /// ```
    /// use ndreduce::{arr2, Array, ErrorKind};
    ///
    /// let a = Array::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(a, arr2(&[[1, 2], [3, 4]]));
    ///
    /// let err = Array::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
    /// assert!(matches!(err.kind(), ErrorKind::JaggedInput { row: 1, .. }));
    /// ```
    pub fn from_rows(rows: &[Vec<A>]) -> Result<Array<A>, ReduceError>
    where
        A: Clone,
    {
        let ncols = rows.first().map_or(0, Vec::len);
        let mut v = Vec::with_capacity(rows.len() * ncols);
        for (row, elts) in rows.iter().enumerate() {
            if elts.len() != ncols {
                return Err(error::from_kind(ErrorKind::JaggedInput {
                    row,
                    expected: ncols,
                    got: elts.len(),
                }));
            }
            v.extend_from_slice(elts);
        }
        Ok(Array::from_parts(vec![rows.len(), ncols].into_boxed_slice(), v))
    }

    /// Create a one-dimensional array from the inclusive interval
    /// `[start, end]` with `n` elements. `A` must be a floating point type.
    ///
    /// ```
    /// use ndreduce::{arr1, Array};
    ///
    /// let a = Array::linspace(0., 1., 5);
    /// assert_eq!(a, arr1(&[0.0, 0.25, 0.5, 0.75, 1.0]));
    /// ```
    pub fn linspace(start: A, end: A, n: usize) -> Array<A>
    where
        A: Float,
    {
        Array::from_vec(linspace::linspace(start, end, n).collect())
    }

    /// Create a one-dimensional array from the half-open interval
    /// `[start, end)` with elements spaced by `step`. `A` must be a
    /// floating point type.
    ///
    /// ```
    /// use ndreduce::{arr1, Array};
    ///
    /// let a = Array::range(0., 5., 1.);
    /// assert_eq!(a, arr1(&[0., 1., 2., 3., 4.]));
    /// ```
    pub fn range(start: A, end: A, step: A) -> Array<A>
    where
        A: Float,
    {
        Array::from_vec(linspace::range(start, end, step).collect())
    }

    /// Internal constructor; the caller guarantees that the element count
    /// matches the shape.
    pub(crate) fn from_parts(dim: Box<[Ix]>, data: Vec<A>) -> Array<A> {
        debug_assert_eq!(dimension::size_of_checked(&dim), Some(data.len()));
        Array { dim, data }
    }
}

fn size_checked_unwrap(shape: &[Ix]) -> usize {
    match dimension::size_of_checked(shape) {
        Some(size) => size,
        None => panic!("ndreduce: shape too large, number of elements overflows usize"),
    }
}
