// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Histogram binning over the flattened elements of an array.

use num_traits::{Float, FromPrimitive};

use crate::imp_prelude::*;

/// Bin the elements of `a` into `bins` equal-width buckets and return
/// `(edges, counts)`.
///
/// The buckets span `[min, max]` of the non-missing elements; `edges` holds
/// the `bins + 1` evenly spaced boundaries and `counts` the number of
/// elements per bucket. Every bucket is half-open except the last, which
/// also includes the upper boundary. When all elements are equal the range
/// is widened by one half on each side, so a single value still lands in a
/// bucket of nonzero width.
///
/// Missing values never count toward any bucket.
///
/// **Errors** if `bins` is zero, or if the array has no non-missing
/// elements to span a range with.
///
/// ```
/// use ndreduce::{arr1, histogram};
///
/// let a = arr1(&[1., 1., 2., 3., 3., 3.]);
/// let (edges, counts) = histogram(&a, 2).unwrap();
/// assert_eq!(edges, arr1(&[1., 2., 3.]));
/// assert_eq!(counts, arr1(&[2, 4]));
/// ```
pub fn histogram<A>(a: &Array<A>, bins: usize) -> Result<(Array<A>, Array<usize>), ReduceError>
where
    A: Element + Float + FromPrimitive,
{
    if bins == 0 {
        return Err(error::from_kind(ErrorKind::InvalidBinCount));
    }
    let values: Vec<A> = a.iter().filter(|elt| !elt.is_missing()).copied().collect();
    let (mut lo, mut hi) = match values.first() {
        None => return Err(error::empty_reduction("histogram")),
        Some(&first) => (first, first),
    };
    for &value in &values {
        if value < lo {
            lo = value;
        }
        if value > hi {
            hi = value;
        }
    }
    if lo == hi {
        let half = A::from_f64(0.5)
            .expect("converting a constant to the element type must not fail");
        lo = lo - half;
        hi = hi + half;
    }
    let edges = Array::linspace(lo, hi, bins + 1);
    let width = hi - lo;
    let nbins = A::from_usize(bins)
        .expect("converting the bin count to the element type must not fail");
    let mut counts = vec![0_usize; bins];
    for value in values {
        let t = ((value - lo) / width * nbins).floor();
        let mut index = t.to_usize().unwrap_or(0);
        // The maximum itself falls in the last, closed bucket.
        if index >= bins {
            index = bins - 1;
        }
        counts[index] += 1;
    }
    Ok((edges, Array::from_vec(counts)))
}
