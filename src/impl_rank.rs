// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rank statistics: median and percentile with linear interpolation.

use std::cmp::Ordering;

use num_traits::{Float, FromPrimitive};

use crate::imp_prelude::*;

impl<A> Array<A>
where
    A: Element + Float + FromPrimitive,
{
    /// Return the median of all elements: the middle value of the sorted
    /// elements, or the arithmetic mean of the two middle values when the
    /// count is even. The input is not mutated.
    ///
    /// **Errors** if the array is empty.
    ///
    /// ```
    /// use ndreduce::{array, NanPolicy};
    ///
    /// let a = array![5., 1., 4., 2.];
    /// assert_eq!(a.median(NanPolicy::Propagate).unwrap(), 3.);
    /// ```
    pub fn median(&self, policy: NanPolicy) -> Result<A, ReduceError> {
        self.median_axes(None, policy)?.into_scalar()
    }

    /// Return the median over the collapsed axes.
    ///
    /// Under [`NanPolicy::Propagate`] a lane containing a missing value
    /// yields NaN; this is decided before any sorting happens, so NaN never
    /// participates in an ordering. Under [`NanPolicy::Skip`] missing
    /// values are dropped from the lane first; an all-missing lane yields
    /// NaN.
    ///
    /// **Errors** if an axis is invalid or the lanes are structurally
    /// empty.
    pub fn median_axes(
        &self,
        collapse: Option<&[Axis]>,
        policy: NanPolicy,
    ) -> Result<Array<A>, ReduceError> {
        let lanes = self.gather_lanes("median", collapse)?;
        Ok(lanes.apply(policy, |sorted| {
            let n = sorted.len();
            let mid = n / 2;
            if n % 2 == 1 {
                sorted[mid]
            } else {
                let two = A::one() + A::one();
                (sorted[mid - 1] + sorted[mid]) / two
            }
        }))
    }

    /// Return the `q`th percentile of all elements, `q` in `[0, 100]`.
    ///
    /// **Errors** if `q` is out of range or the array is empty.
    ///
    /// ```
    /// use ndreduce::{array, NanPolicy};
    ///
    /// let a = array![15., 20., 35., 40., 50.];
    /// assert_eq!(a.percentile(30., NanPolicy::Propagate).unwrap(), 23.);
    /// ```
    pub fn percentile(&self, q: A, policy: NanPolicy) -> Result<A, ReduceError> {
        self.percentile_axes(q, None, policy)?.into_scalar()
    }

    /// Return the `q`th percentile over the collapsed axes, `q` in
    /// `[0, 100]`, using linear interpolation between the two nearest
    /// ranks: for a sorted lane of `n` values the fractional rank is
    /// `r = q / 100 · (n − 1)` and the result is
    /// `v[⌊r⌋] + (r − ⌊r⌋) · (v[⌈r⌉] − v[⌊r⌋])`.
    ///
    /// Other interpolation conventions (nearest, lower, higher, midpoint)
    /// exist and give different answers at the same `q`; this method is
    /// fixed to the linear rule. `q = 0` gives the minimum, `q = 100` the
    /// maximum and `q = 50` the median. A lane of one element gives that
    /// element for every `q`.
    ///
    /// Missing values are handled exactly as in
    /// [`median_axes`](Array::median_axes).
    ///
    /// **Errors** if `q` is out of range, an axis is invalid, or the lanes
    /// are structurally empty.
    pub fn percentile_axes(
        &self,
        q: A,
        collapse: Option<&[Axis]>,
        policy: NanPolicy,
    ) -> Result<Array<A>, ReduceError> {
        let hundred = A::from_usize(100)
            .expect("converting a constant to the element type must not fail");
        if !(q >= A::zero() && q <= hundred) {
            return Err(error::from_kind(ErrorKind::QuantileOutOfRange {
                q: q.to_f64().unwrap_or(f64::NAN),
            }));
        }
        let lanes = self.gather_lanes("percentile", collapse)?;
        Ok(lanes.apply(policy, |sorted| {
            let n = sorted.len();
            if n == 1 {
                return sorted[0];
            }
            let last = A::from_usize(n - 1)
                .expect("converting the element count to the element type must not fail");
            let rank = q / hundred * last;
            let frac = rank - rank.floor();
            let lo = rank.floor().to_usize().unwrap_or(0);
            let hi = rank.ceil().to_usize().unwrap_or(n - 1);
            sorted[lo] + frac * (sorted[hi] - sorted[lo])
        }))
    }

    /// Collect the reduction lanes for a rank statistic. Validates the
    /// axes and rejects structurally empty lanes.
    fn gather_lanes(
        &self,
        op: &'static str,
        collapse: Option<&[Axis]>,
    ) -> Result<Lanes<A>, ReduceError> {
        let axes = dimension::normalize_axes(self.ndim(), collapse)?;
        let group: usize = axes.iter().map(|&ax| self.shape()[ax]).product();
        if group == 0 {
            return Err(error::empty_reduction(op));
        }
        let (out_dim, proj) = dimension::projection_strides(self.shape(), &axes);
        let out_len = dimension::size_of(&out_dim);
        let mut values = vec![Vec::new(); out_len];
        for (coord, elt) in self.indexed_iter() {
            values[dimension::project_offset(&coord, &proj)].push(*elt);
        }
        Ok(Lanes { out_dim, values })
    }
}

struct Lanes<A> {
    out_dim: Box<[Ix]>,
    values: Vec<Vec<A>>,
}

impl<A> Lanes<A>
where
    A: Element + Float,
{
    /// Apply the missing-value policy to every lane, sort the survivors
    /// and compute the statistic. Lanes poisoned by (or consisting only
    /// of) missing values become NaN.
    fn apply<F>(self, policy: NanPolicy, stat: F) -> Array<A>
    where
        F: Fn(&[A]) -> A,
    {
        let data = self
            .values
            .into_iter()
            .map(|mut lane| {
                match policy {
                    NanPolicy::Propagate => {
                        if lane.iter().any(Element::is_missing) {
                            return A::nan();
                        }
                    }
                    NanPolicy::Skip => {
                        lane.retain(|elt| !elt.is_missing());
                        if lane.is_empty() {
                            return A::nan();
                        }
                    }
                }
                // Missing values were removed above, so partial_cmp cannot
                // fail here.
                lane.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
                stat(&lane)
            })
            .collect();
        Array::from_parts(self.out_dim, data)
    }
}
