// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::imp_prelude::*;

/// Create an [`Array`] with one, two or three dimensions.
///
/// ```
/// use ndreduce::array;
/// let a1 = array![1, 2, 3, 4];
///
/// let a2 = array![[1, 2],
///                 [3, 4]];
///
/// let a3 = array![[[1, 2], [3, 4]],
///                 [[5, 6], [7, 8]]];
///
/// assert_eq!(a1.shape(), &[4]);
/// assert_eq!(a2.shape(), &[2, 2]);
/// assert_eq!(a3.shape(), &[2, 2, 2]);
/// ```
///
/// Rows are fixed-size arrays, so a jagged literal fails to compile rather
/// than at runtime.
#[macro_export]
macro_rules! array {
    ($([$([$($x:expr),* $(,)*]),+ $(,)*]),+ $(,)*) => {{
        $crate::arr3(&[$([$([$($x,)*],)*],)*])
    }};
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::arr2(&[$([$($x,)*],)*])
    }};
    ($($x:expr),* $(,)*) => {{
        $crate::arr1(&[$($x,)*])
    }};
}

/// Create a zero-dimensional array with the element `x`.
///
/// ```
/// use ndreduce::arr0;
///
/// let a = arr0(3.);
/// assert_eq!(a.ndim(), 0);
/// assert_eq!(a.into_scalar().unwrap(), 3.);
/// ```
pub fn arr0<A>(x: A) -> Array<A> {
    Array::from_parts(Box::new([]), vec![x])
}

/// Create a one-dimensional array with elements from `xs`.
pub fn arr1<A: Clone>(xs: &[A]) -> Array<A> {
    Array::from_vec(xs.to_vec())
}

/// Create a two-dimensional array with elements from `xs`.
///
/// ```
/// use ndreduce::arr2;
///
/// let a = arr2(&[[1, 2, 3],
///                [4, 5, 6]]);
/// assert_eq!(a.shape(), &[2, 3]);
/// ```
pub fn arr2<A: Clone, const N: usize>(xs: &[[A; N]]) -> Array<A> {
    let data = xs.iter().flatten().cloned().collect();
    Array::from_parts(vec![xs.len(), N].into_boxed_slice(), data)
}

/// Create a three-dimensional array with elements from `xs`.
///
/// ```
/// use ndreduce::arr3;
///
/// let a = arr3(&[[[1, 2],
///                 [3, 4]],
///                [[5, 6],
///                 [7, 8]],
///                [[9, 0],
///                 [1, 2]]]);
/// assert_eq!(a.shape(), &[3, 2, 2]);
/// ```
pub fn arr3<A: Clone, const N: usize, const M: usize>(xs: &[[[A; M]; N]]) -> Array<A> {
    let data = xs
        .iter()
        .flatten()
        .flatten()
        .cloned()
        .collect();
    Array::from_parts(vec![xs.len(), N, M].into_boxed_slice(), data)
}
