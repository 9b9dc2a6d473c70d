// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Summary statistics: mean, variance, standard deviation.

use num_traits::{Float, FromPrimitive};

use crate::imp_prelude::*;

impl<A> Array<A>
where
    A: Element + Float + FromPrimitive,
{
    /// Return the mean of all elements.
    ///
    /// **Errors** if the array is empty.
    ///
    /// ```
    /// use ndreduce::{array, NanPolicy};
    ///
    /// let a = array![1., 2., 3., 4.];
    /// assert_eq!(a.mean(NanPolicy::Propagate).unwrap(), 2.5);
    /// ```
    pub fn mean(&self, policy: NanPolicy) -> Result<A, ReduceError> {
        self.mean_axes(None, policy)?.into_scalar()
    }

    /// Return the mean over the collapsed axes: the sum divided by the
    /// number of elements collapsed into each lane.
    ///
    /// Under [`NanPolicy::Skip`] the divisor is the per-lane count of
    /// non-missing elements; a lane with no surviving elements yields NaN.
    ///
    /// **Errors** if an axis is invalid or the collapsed count is
    /// structurally zero.
    ///
    /// ```
    /// use ndreduce::{array, Axis, NanPolicy};
    ///
    /// let a = array![[1., 2.], [3., 4.]];
    /// let by_col = a.mean_axes(Some(&[Axis(0)]), NanPolicy::Propagate).unwrap();
    /// assert_eq!(by_col, array![2., 3.]);
    /// ```
    pub fn mean_axes(
        &self,
        collapse: Option<&[Axis]>,
        policy: NanPolicy,
    ) -> Result<Array<A>, ReduceError> {
        let axes = dimension::normalize_axes(self.ndim(), collapse)?;
        let count: usize = axes.iter().map(|&ax| self.shape()[ax]).product();
        if count == 0 {
            return Err(error::empty_reduction("mean"));
        }
        let sum = self.reduce(ReduceOp::Sum, collapse, policy)?;
        match policy {
            NanPolicy::Propagate => {
                let n = A::from_usize(count)
                    .expect("converting the element count to the element type must not fail");
                Ok(sum.mapv(|s| s / n))
            }
            NanPolicy::Skip => {
                let counts = self
                    .map(|elt| if elt.is_missing() { A::zero() } else { A::one() })
                    .reduce(ReduceOp::Sum, collapse, NanPolicy::Propagate)?;
                // An all-missing lane divides NaN by zero and stays NaN.
                Ok(sum.zip_with(&counts, |&s, &n| s / n))
            }
        }
    }

    /// Return the variance of all elements, with `ddof` delta degrees of
    /// freedom.
    ///
    /// `ddof = 0` gives the population variance, `ddof = 1` the sample
    /// variance.
    ///
    /// **Errors** if the divisor `count - ddof` is not positive.
    pub fn var(&self, ddof: A, policy: NanPolicy) -> Result<A, ReduceError> {
        self.var_axes(None, ddof, policy)?.into_scalar()
    }

    /// Return the variance over the collapsed axes: the mean of squared
    /// deviations from each lane's mean, divided by `count - ddof`.
    ///
    /// Under [`NanPolicy::Skip`] the count is the per-lane count of
    /// non-missing elements; a lane whose count does not exceed `ddof`
    /// yields NaN rather than failing the whole reduction.
    ///
    /// **Errors** if an axis is invalid, the collapsed count is
    /// structurally zero, or the structural divisor `count - ddof` is not
    /// positive.
    ///
    /// ```
    /// use ndreduce::{array, Axis, NanPolicy};
    ///
    /// let a = array![[1., 2.], [3., 4.]];
    /// let by_row = a.var_axes(Some(&[Axis(1)]), 0., NanPolicy::Propagate).unwrap();
    /// assert_eq!(by_row, array![0.25, 0.25]);
    /// ```
    pub fn var_axes(
        &self,
        collapse: Option<&[Axis]>,
        ddof: A,
        policy: NanPolicy,
    ) -> Result<Array<A>, ReduceError> {
        let axes = dimension::normalize_axes(self.ndim(), collapse)?;
        let count: usize = axes.iter().map(|&ax| self.shape()[ax]).product();
        if count == 0 {
            return Err(error::empty_reduction("variance"));
        }
        let n = A::from_usize(count)
            .expect("converting the element count to the element type must not fail");
        let dof = n - ddof;
        if dof <= A::zero() {
            return Err(error::from_kind(ErrorKind::DegenerateVariance {
                count,
                ddof: ddof.to_f64().unwrap_or(f64::NAN),
            }));
        }
        let mean = self.mean_axes(collapse, policy)?;
        let (out_dim, proj) = dimension::projection_strides(self.shape(), &axes);
        let out_len = dimension::size_of(&out_dim);

        // Second pass: accumulate squared deviations per lane.
        let mut ssq = vec![A::zero(); out_len];
        let mut counts = vec![0_usize; out_len];
        for (coord, elt) in self.indexed_iter() {
            if policy == NanPolicy::Skip && elt.is_missing() {
                continue;
            }
            let offset = dimension::project_offset(&coord, &proj);
            let dev = *elt - mean.as_slice()[offset];
            ssq[offset] = ssq[offset] + dev * dev;
            counts[offset] += 1;
        }
        let data = ssq
            .into_iter()
            .zip(counts)
            .map(|(ssq, lane_count)| match policy {
                NanPolicy::Propagate => ssq / dof,
                NanPolicy::Skip => {
                    let lane_dof = A::from_usize(lane_count)
                        .expect("converting the element count to the element type must not fail")
                        - ddof;
                    if lane_dof > A::zero() {
                        ssq / lane_dof
                    } else {
                        A::nan()
                    }
                }
            })
            .collect();
        Ok(Array::from_parts(out_dim, data))
    }

    /// Return the standard deviation of all elements, with `ddof` delta
    /// degrees of freedom.
    ///
    /// **Errors** if the divisor `count - ddof` is not positive.
    ///
    /// ```
    /// use ndreduce::{array, NanPolicy};
    ///
    /// let a = array![2., 4., 4., 4., 5., 5., 7., 9.];
    /// assert_eq!(a.std(0., NanPolicy::Propagate).unwrap(), 2.);
    /// ```
    pub fn std(&self, ddof: A, policy: NanPolicy) -> Result<A, ReduceError> {
        self.std_axes(None, ddof, policy)?.into_scalar()
    }

    /// Return the standard deviation over the collapsed axes: the square
    /// root of [`var_axes`](Array::var_axes), with the same contracts.
    pub fn std_axes(
        &self,
        collapse: Option<&[Axis]>,
        ddof: A,
        policy: NanPolicy,
    ) -> Result<Array<A>, ReduceError> {
        Ok(self.var_axes(collapse, ddof, policy)?.mapv(A::sqrt))
    }
}
