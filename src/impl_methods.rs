// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::slice;

use crate::imp_prelude::*;
use crate::indexes::Indices;

impl<A> Array<A> {
    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return true if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the number of dimensions (axes) in the array.
    pub fn ndim(&self) -> usize {
        self.dim.len()
    }

    /// Return the shape of the array as a slice.
    pub fn shape(&self) -> &[Ix] {
        &self.dim
    }

    /// Return the length of `axis`.
    ///
    /// **Panics** if `axis` is out of bounds.
    pub fn len_of(&self, axis: Axis) -> Ix {
        self.dim[axis.index()]
    }

    /// Return the flat elements of the array in row-major order.
    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    /// Return the flat backing vector, consuming the array.
    pub fn into_raw_vec(self) -> Vec<A> {
        self.data
    }

    /// Return an iterator of references to the elements of the array, in
    /// row-major order.
    pub fn iter(&self) -> slice::Iter<'_, A> {
        self.data.iter()
    }

    /// Return an iterator of coordinates and references to the elements of
    /// the array, in row-major order.
    ///
    /// Iterator element type is `(Vec<Ix>, &A)`.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Vec<Ix>, &A)> {
        Indices::new(&self.dim).zip(self.data.iter())
    }

    /// Return a reference to the element at `index`, or `None` if the
    /// coordinate's rank or bounds do not match the array.
    ///
    /// ```
    /// use ndreduce::arr2;
    ///
    /// let a = arr2(&[[1, 2], [3, 4]]);
    /// assert_eq!(a.get(&[1, 1]), Some(&4));
    /// assert_eq!(a.get(&[1, 2]), None);
    /// assert_eq!(a.get(&[1]), None);
    /// ```
    pub fn get(&self, index: &[Ix]) -> Option<&A> {
        if index.len() != self.ndim() {
            return None;
        }
        if index.iter().zip(self.dim.iter()).any(|(&i, &d)| i >= d) {
            return None;
        }
        let strides = dimension::default_strides(&self.dim);
        self.data.get(dimension::project_offset(index, &strides))
    }

    /// Return the lower-rank array formed by fixing `axis` at `index`:
    /// indexing by a partial coordinate. The subview is materialized as a
    /// new array.
    ///
    /// **Panics** if `axis` or `index` is out of bounds.
    ///
    /// ```
    /// use ndreduce::{arr1, arr2, Axis};
    ///
    /// let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(a.index_axis(Axis(0), 1), arr1(&[4, 5, 6]));
    /// assert_eq!(a.index_axis(Axis(1), 0), arr1(&[1, 4]));
    /// ```
    pub fn index_axis(&self, axis: Axis, index: Ix) -> Array<A>
    where
        A: Clone,
    {
        let ax = axis.index();
        assert!(
            ax < self.ndim(),
            "ndreduce: axis {} out of bounds for rank {}",
            ax,
            self.ndim()
        );
        assert!(
            index < self.dim[ax],
            "ndreduce: index {} out of bounds for axis {} of length {}",
            index,
            ax,
            self.dim[ax]
        );
        let out_dim = dimension::remove_axes(&self.dim, &[ax]);
        // Row-major traversal restricted to a fixed coordinate stays
        // row-major in the surviving axes.
        let data = self
            .indexed_iter()
            .filter(|(coord, _)| coord[ax] == index)
            .map(|(_, elt)| elt.clone())
            .collect();
        Array::from_parts(out_dim, data)
    }

    /// Convert a rank-0 array into its element.
    ///
    /// **Errors** if the array's rank is not 0.
    ///
    /// ```
    /// use ndreduce::{arr0, arr1};
    ///
    /// assert_eq!(arr0(7).into_scalar().unwrap(), 7);
    /// assert!(arr1(&[7]).into_scalar().is_err());
    /// ```
    pub fn into_scalar(mut self) -> Result<A, ReduceError> {
        if self.ndim() != 0 {
            return Err(error::from_kind(ErrorKind::NotScalar { ndim: self.ndim() }));
        }
        match self.data.pop() {
            Some(elt) => Ok(elt),
            None => unreachable!("a rank-0 array holds exactly one element"),
        }
    }

    /// Apply `f` to each element (by value) and return a new array with the
    /// results.
    ///
    /// This is also the explicit upcast path from integer to floating-point
    /// elements before requesting a float-only statistic:
    ///
    /// ```
    /// use ndreduce::arr1;
    ///
    /// let counts = arr1(&[1_i64, 2, 4]);
    /// let mean = counts.mapv(|x| x as f64).mean(Default::default()).unwrap();
    /// assert_eq!(mean, 7. / 3.);
    /// ```
    pub fn mapv<B, F>(&self, mut f: F) -> Array<B>
    where
        A: Clone,
        F: FnMut(A) -> B,
    {
        self.map(move |elt| f(elt.clone()))
    }

    /// Apply `f` to each element (by reference) and return a new array with
    /// the results.
    pub fn map<B, F>(&self, f: F) -> Array<B>
    where
        F: FnMut(&A) -> B,
    {
        let data = self.data.iter().map(f).collect();
        Array::from_parts(self.dim.clone(), data)
    }

    /// Combine two same-shape arrays elementwise. Internal; reductions use
    /// it to divide sums by counts.
    pub(crate) fn zip_with<B, C, F>(&self, rhs: &Array<B>, mut f: F) -> Array<C>
    where
        F: FnMut(&A, &B) -> C,
    {
        debug_assert_eq!(self.shape(), rhs.shape());
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| f(a, b))
            .collect();
        Array::from_parts(self.dim.clone(), data)
    }
}
