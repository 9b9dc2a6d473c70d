// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::Index;
use std::slice;
use std::vec;

use crate::imp_prelude::*;

impl<A: PartialEq> PartialEq for Array<A> {
    /// Return `true` if the shapes are equal and all elements compare
    /// equal.
    ///
    /// The element comparison is `PartialEq`, so for floats NaN is never
    /// equal to NaN.
    fn eq(&self, rhs: &Array<A>) -> bool {
        self.shape() == rhs.shape() && self.as_slice() == rhs.as_slice()
    }
}

impl<A: Eq> Eq for Array<A> {}

/// Converts a vector to a one-dimensional array.
impl<A> From<Vec<A>> for Array<A> {
    fn from(v: Vec<A>) -> Array<A> {
        Array::from_vec(v)
    }
}

/// Converts a vector of rows to a two-dimensional array.
impl<A, const N: usize> From<Vec<[A; N]>> for Array<A> {
    fn from(rows: Vec<[A; N]>) -> Array<A> {
        let nrows = rows.len();
        let data: Vec<A> = rows.into_iter().flatten().collect();
        Array::from_parts(vec![nrows, N].into_boxed_slice(), data)
    }
}

impl<A> FromIterator<A> for Array<A> {
    /// Collects an iterator into a one-dimensional array.
    fn from_iter<I>(iterable: I) -> Array<A>
    where
        I: IntoIterator<Item = A>,
    {
        Array::from_vec(iterable.into_iter().collect())
    }
}

impl<A> IntoIterator for Array<A> {
    type Item = A;
    type IntoIter = vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_raw_vec().into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Array<A> {
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Index the array by a full coordinate, e.g. `a[[1, 2]]`.
///
/// **Panics** if the coordinate's rank or bounds do not match the array.
impl<A, const N: usize> Index<[Ix; N]> for Array<A> {
    type Output = A;

    fn index(&self, index: [Ix; N]) -> &A {
        self.index(&index[..])
    }
}

/// Index a one-dimensional array by position, e.g. `a[3]`.
///
/// **Panics** if the array is not one-dimensional or the index is out of
/// bounds.
impl<A> Index<Ix> for Array<A> {
    type Output = A;

    fn index(&self, index: Ix) -> &A {
        self.index(&[index][..])
    }
}

/// Index the array by a full coordinate given as a slice.
///
/// **Panics** if the coordinate's rank or bounds do not match the array.
impl<A> Index<&[Ix]> for Array<A> {
    type Output = A;

    fn index(&self, index: &[Ix]) -> &A {
        match self.get(index) {
            Some(elt) => elt,
            None => panic!(
                "ndreduce: index {:?} out of bounds for array of shape {:?}",
                index,
                self.shape()
            ),
        }
    }
}
