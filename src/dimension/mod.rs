// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and axis utilities.

use crate::error::{self, ErrorKind, ReduceError};
use crate::Ix;

mod axis;

pub use self::axis::Axis;

/// Return the number of elements a shape describes.
///
/// The empty shape (rank 0) has size 1.
pub fn size_of(shape: &[Ix]) -> usize {
    shape.iter().product()
}

/// Return the number of elements a shape describes, or `None` if the
/// product overflows `usize`.
pub fn size_of_checked(shape: &[Ix]) -> Option<usize> {
    shape
        .iter()
        .try_fold(1_usize, |acc, &d| acc.checked_mul(d))
}

/// Compute row-major strides for a shape.
///
/// Shape (a, b, c) gives strides (b · c, c, 1).
pub fn default_strides(shape: &[Ix]) -> Box<[Ix]> {
    let mut strides = vec![0; shape.len()].into_boxed_slice();
    let mut cum_prod = 1;
    for (stride, &dim) in strides.iter_mut().rev().zip(shape.iter().rev()) {
        *stride = cum_prod;
        cum_prod *= dim;
    }
    strides
}

/// Validate a reduction's collapse axes against an array rank.
///
/// `None` means “collapse everything” and yields every axis. Otherwise each
/// axis must lie in `[0, ndim)` and may appear only once. The result is
/// sorted ascending.
pub(crate) fn normalize_axes(
    ndim: usize,
    collapse: Option<&[Axis]>,
) -> Result<Vec<usize>, ReduceError> {
    let collapse = match collapse {
        None => return Ok((0..ndim).collect()),
        Some(axes) => axes,
    };
    let mut seen = vec![false; ndim];
    for &axis in collapse {
        let ax = axis.index();
        if ax >= ndim {
            return Err(error::from_kind(ErrorKind::AxisOutOfBounds { axis: ax, ndim }));
        }
        if seen[ax] {
            return Err(error::from_kind(ErrorKind::DuplicateAxis { axis: ax }));
        }
        seen[ax] = true;
    }
    Ok((0..ndim).filter(|&ax| seen[ax]).collect())
}

/// Remove the given axes (sorted, unique) from a shape, preserving the
/// relative order of the surviving axes.
pub(crate) fn remove_axes(shape: &[Ix], collapse: &[usize]) -> Box<[Ix]> {
    shape
        .iter()
        .enumerate()
        .filter(|(ax, _)| !collapse.contains(ax))
        .map(|(_, &d)| d)
        .collect()
}

/// For a reduction that collapses `collapse` (sorted, unique), return the
/// output shape together with one projection stride per *input* axis: the
/// row-major stride of the corresponding output axis for surviving axes,
/// and 0 for collapsed axes.
///
/// The flat output offset of an input coordinate is then the dot product of
/// the coordinate with the projection strides; all members of one reduction
/// group project onto the same offset.
pub(crate) fn projection_strides(shape: &[Ix], collapse: &[usize]) -> (Box<[Ix]>, Vec<Ix>) {
    let out_dim = remove_axes(shape, collapse);
    let out_strides = default_strides(&out_dim);
    let mut proj = vec![0; shape.len()];
    let mut out_ax = 0;
    for (ax, stride) in proj.iter_mut().enumerate() {
        if !collapse.contains(&ax) {
            *stride = out_strides[out_ax];
            out_ax += 1;
        }
    }
    (out_dim, proj)
}

/// Dot product of a coordinate with projection strides.
#[inline]
pub(crate) fn project_offset(coord: &[Ix], proj: &[Ix]) -> usize {
    coord.iter().zip(proj).map(|(&c, &s)| c * s).sum()
}
