// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The axis reduction engine and its convenience entry points.

use crate::imp_prelude::*;
use crate::numeric_util;

impl<A> Array<A>
where
    A: ReduceElem,
{
    /// Collapse the array with a reduction operator.
    ///
    /// `collapse` names the axes that disappear from the output shape; the
    /// relative order of the surviving axes is preserved. `None` collapses
    /// every axis and yields a rank-0 array (convert it with
    /// [`into_scalar`](Array::into_scalar)).
    ///
    /// Elements are folded in row-major traversal order, so floating-point
    /// results are reproducible.
    ///
    /// **Errors** if an axis is out of bounds or duplicated, or if `op` is
    /// `Min`/`Max` and a reduction group is structurally empty (a collapsed
    /// axis has extent zero). `Sum`/`Product`/`Any`/`All` return their
    /// identity for empty groups instead.
    ///
    /// ```
    /// use ndreduce::{array, Axis, NanPolicy, ReduceOp};
    ///
    /// let a = array![[1., 2.], [3., 4.]];
    ///
    /// let col_sums = a.reduce(ReduceOp::Sum, Some(&[Axis(0)]), NanPolicy::Propagate).unwrap();
    /// assert_eq!(col_sums, array![4., 6.]);
    ///
    /// let total = a.reduce(ReduceOp::Sum, None, NanPolicy::Propagate).unwrap();
    /// assert_eq!(total.into_scalar().unwrap(), 10.);
    /// ```
    pub fn reduce(
        &self,
        op: ReduceOp,
        collapse: Option<&[Axis]>,
        policy: NanPolicy,
    ) -> Result<Array<A>, ReduceError> {
        let axes = dimension::normalize_axes(self.ndim(), collapse)?;
        let group: usize = axes.iter().map(|&ax| self.shape()[ax]).product();
        let (out_dim, proj) = dimension::projection_strides(self.shape(), &axes);

        if group == 0 {
            // Structurally empty groups: identity or error, never NaN.
            return match op.identity::<A>() {
                Some(id) => Ok(Array::from_elem(&out_dim, id)),
                None => Err(error::empty_reduction(op.name())),
            };
        }

        let out_len = dimension::size_of(&out_dim);
        let mut acc: Vec<Option<A>> = vec![None; out_len];
        for (coord, elt) in self.indexed_iter() {
            if policy == NanPolicy::Skip && elt.is_missing() {
                continue;
            }
            let offset = dimension::project_offset(&coord, &proj);
            let slot = &mut acc[offset];
            *slot = Some(match slot.take() {
                None => op.lift(elt.clone()),
                Some(a) => op.combine(a, elt.clone()),
            });
        }
        let data = acc
            .into_iter()
            .map(|slot| match slot {
                Some(value) => value,
                // The group had elements but all were skipped, so the
                // element type has a missing sentinel: the all-missing
                // result is that sentinel.
                None => A::missing().unwrap_or_else(A::zero),
            })
            .collect();
        Ok(Array::from_parts(out_dim, data))
    }

    /// Collapse every axis with a reduction operator and return the bare
    /// element.
    ///
    /// **Errors** under the same conditions as [`reduce`](Array::reduce).
    pub fn reduce_all(&self, op: ReduceOp, policy: NanPolicy) -> Result<A, ReduceError> {
        self.reduce(op, None, policy)?.into_scalar()
    }

    /// Return the sum of all elements.
    ///
    /// Contiguous storage is summed with a fixed unrolled order; see
    /// [`reduce`](Array::reduce) for the strict row-major fold.
    ///
    /// ```
    /// use ndreduce::array;
    ///
    /// let a = array![[1., 2.], [3., 4.]];
    /// assert_eq!(a.sum(), 10.);
    /// ```
    pub fn sum(&self) -> A {
        numeric_util::unrolled_sum(self.as_slice())
    }

    /// Return the product of all elements.
    pub fn product(&self) -> A {
        self.iter()
            .fold(A::one(), |acc, elt| acc * elt.clone())
    }

    /// Return the smallest element, with missing values propagated.
    ///
    /// **Errors** if the array is empty.
    pub fn min(&self) -> Result<A, ReduceError> {
        self.reduce_all(ReduceOp::Min, NanPolicy::Propagate)
    }

    /// Return the largest element, with missing values propagated.
    ///
    /// **Errors** if the array is empty.
    pub fn max(&self) -> Result<A, ReduceError> {
        self.reduce_all(ReduceOp::Max, NanPolicy::Propagate)
    }

    /// Return the sum along `axis` (the axis collapses).
    ///
    /// ```
    /// use ndreduce::{array, Axis};
    ///
    /// let a = array![[1., 2.], [3., 4.]];
    /// assert_eq!(a.sum_axis(Axis(0)).unwrap(), array![4., 6.]);
    /// assert_eq!(a.sum_axis(Axis(1)).unwrap(), array![3., 7.]);
    /// ```
    ///
    /// **Errors** if `axis` is out of bounds.
    pub fn sum_axis(&self, axis: Axis) -> Result<Array<A>, ReduceError> {
        self.reduce(ReduceOp::Sum, Some(&[axis]), NanPolicy::Propagate)
    }

    /// Return the product along `axis` (the axis collapses).
    ///
    /// **Errors** if `axis` is out of bounds.
    pub fn product_axis(&self, axis: Axis) -> Result<Array<A>, ReduceError> {
        self.reduce(ReduceOp::Product, Some(&[axis]), NanPolicy::Propagate)
    }

    /// Return the minimum along `axis` (the axis collapses), with missing
    /// values propagated.
    ///
    /// **Errors** if `axis` is out of bounds or has extent zero.
    pub fn min_axis(&self, axis: Axis) -> Result<Array<A>, ReduceError> {
        self.reduce(ReduceOp::Min, Some(&[axis]), NanPolicy::Propagate)
    }

    /// Return the maximum along `axis` (the axis collapses), with missing
    /// values propagated.
    ///
    /// **Errors** if `axis` is out of bounds or has extent zero.
    pub fn max_axis(&self, axis: Axis) -> Result<Array<A>, ReduceError> {
        self.reduce(ReduceOp::Max, Some(&[axis]), NanPolicy::Propagate)
    }

    /// Return, per lane along `axis`, whether any element is true
    /// (nonzero).
    ///
    /// **Errors** if `axis` is out of bounds.
    pub fn any_axis(&self, axis: Axis) -> Result<Array<bool>, ReduceError> {
        let reduced = self.reduce(ReduceOp::Any, Some(&[axis]), NanPolicy::Propagate)?;
        Ok(reduced.map(Element::is_truthy))
    }

    /// Return, per lane along `axis`, whether every element is true
    /// (nonzero).
    ///
    /// **Errors** if `axis` is out of bounds.
    pub fn all_axis(&self, axis: Axis) -> Result<Array<bool>, ReduceError> {
        let reduced = self.reduce(ReduceOp::All, Some(&[axis]), NanPolicy::Propagate)?;
        Ok(reduced.map(Element::is_truthy))
    }
}

impl<A> Array<A>
where
    A: Element,
{
    /// Return true if any element is true (nonzero for numeric element
    /// types). The empty array gives false.
    ///
    /// ```
    /// use ndreduce::arr1;
    ///
    /// assert!(arr1(&[0, 0, 3]).any());
    /// assert!(arr1(&[true, false]).any());
    /// assert!(!arr1(&[] as &[i32]).any());
    /// ```
    pub fn any(&self) -> bool {
        self.iter().any(Element::is_truthy)
    }

    /// Return true if every element is true (nonzero for numeric element
    /// types). The empty array gives true.
    pub fn all(&self) -> bool {
        self.iter().all(Element::is_truthy)
    }

    /// Return the flat index of the smallest element; on ties, the first
    /// occurrence in row-major order. The first missing value, if any,
    /// wins the lane.
    ///
    /// **Errors** if the array is empty.
    ///
    /// ```
    /// use ndreduce::arr1;
    ///
    /// assert_eq!(arr1(&[3, 1, 1, 2]).argmin().unwrap(), 1);
    /// ```
    pub fn argmin(&self) -> Result<Ix, ReduceError> {
        self.arg_extremum("argmin", |elt, best| elt < best)
    }

    /// Return the flat index of the largest element; on ties, the first
    /// occurrence in row-major order. The first missing value, if any,
    /// wins the lane.
    ///
    /// **Errors** if the array is empty.
    ///
    /// ```
    /// use ndreduce::arr1;
    ///
    /// assert_eq!(arr1(&[3, 5, 5, 2]).argmax().unwrap(), 1);
    /// ```
    pub fn argmax(&self) -> Result<Ix, ReduceError> {
        self.arg_extremum("argmax", |elt, best| elt > best)
    }

    /// Return, per lane, the index along `axis` of the smallest element;
    /// on ties, the first occurrence.
    ///
    /// **Errors** if `axis` is out of bounds or has extent zero.
    pub fn argmin_axis(&self, axis: Axis) -> Result<Array<Ix>, ReduceError> {
        self.arg_extremum_axis("argmin", axis, |elt, best| elt < best)
    }

    /// Return, per lane, the index along `axis` of the largest element;
    /// on ties, the first occurrence.
    ///
    /// **Errors** if `axis` is out of bounds or has extent zero.
    pub fn argmax_axis(&self, axis: Axis) -> Result<Array<Ix>, ReduceError> {
        self.arg_extremum_axis("argmax", axis, |elt, best| elt > best)
    }

    fn arg_extremum<F>(&self, op: &'static str, better: F) -> Result<Ix, ReduceError>
    where
        F: Fn(&A, &A) -> bool,
    {
        let mut best: Option<(Ix, &A)> = None;
        for (i, elt) in self.iter().enumerate() {
            if elt.is_missing() {
                return Ok(i);
            }
            match best {
                Some((_, value)) if !better(elt, value) => {}
                // Strict comparison: an equal later element never displaces
                // the first occurrence.
                _ => best = Some((i, elt)),
            }
        }
        best.map(|(i, _)| i).ok_or_else(|| error::empty_reduction(op))
    }

    fn arg_extremum_axis<F>(
        &self,
        op: &'static str,
        axis: Axis,
        better: F,
    ) -> Result<Array<Ix>, ReduceError>
    where
        F: Fn(&A, &A) -> bool,
    {
        let axes = dimension::normalize_axes(self.ndim(), Some(&[axis]))?;
        let ax = axes[0];
        if self.shape()[ax] == 0 {
            return Err(error::empty_reduction(op));
        }
        let (out_dim, proj) = dimension::projection_strides(self.shape(), &axes);
        let out_len = dimension::size_of(&out_dim);
        let mut best: Vec<Option<(Ix, A)>> = vec![None; out_len];
        let mut fixed = vec![false; out_len];
        // Row-major traversal visits each lane in increasing order along
        // `ax`, so "first occurrence" is simply "first visited".
        for (coord, elt) in self.indexed_iter() {
            let offset = dimension::project_offset(&coord, &proj);
            if fixed[offset] {
                continue;
            }
            if elt.is_missing() {
                best[offset] = Some((coord[ax], elt.clone()));
                fixed[offset] = true;
                continue;
            }
            match best[offset] {
                Some((_, ref value)) if !better(elt, value) => {}
                _ => best[offset] = Some((coord[ax], elt.clone())),
            }
        }
        let data = best
            .into_iter()
            .map(|slot| match slot {
                Some((i, _)) => i,
                None => unreachable!("every lane has at least one element"),
            })
            .collect();
        Ok(Array::from_parts(out_dim, data))
    }
}
