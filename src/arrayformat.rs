// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::Array;

fn format_array<A, F>(a: &Array<A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let ndim = a.ndim();
    let mut last_index = vec![0; ndim];
    for _ in 0..ndim {
        write!(f, "[")?;
    }
    let mut first = true;
    // Use the indexed iterator, and take the index wraparounds
    // as cues for when to add []'s and how many to add.
    for (index, elt) in a.indexed_iter() {
        let take_n = if ndim == 0 { 1 } else { ndim - 1 };
        let mut update_index = false;
        for (i, (a, b)) in index
            .iter()
            .take(take_n)
            .zip(last_index.iter())
            .enumerate()
        {
            if a != b {
                // New row.
                // # of ['s needed
                let n = ndim - i - 1;
                for _ in 0..n {
                    write!(f, "]")?;
                }
                writeln!(f, ",")?;
                for _ in 0..ndim - n {
                    write!(f, " ")?;
                }
                for _ in 0..n {
                    write!(f, "[")?;
                }
                first = true;
                update_index = true;
                break;
            }
        }
        if !first {
            write!(f, ", ")?;
        }
        first = false;
        format(elt, f)?;

        if update_index {
            last_index = index;
        }
    }
    for _ in 0..ndim {
        write!(f, "]")?;
    }
    Ok(())
}

/// Format the array using `Display` and apply the formatting parameters
/// used to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::Display> fmt::Display for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, followed by its shape.
impl<A: fmt::Debug> fmt::Debug for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)?;
        write!(f, " shape={:?}", self.shape())
    }
}

#[cfg(test)]
mod tests {
    use crate::{arr0, arr1, arr2};

    #[test]
    fn display_one_dimensional() {
        assert_eq!(format!("{}", arr1(&[1, 2, 3])), "[1, 2, 3]");
    }

    #[test]
    fn display_two_dimensional() {
        let a = arr2(&[[1, 2], [3, 4]]);
        assert_eq!(format!("{}", a), "[[1, 2],\n [3, 4]]");
    }

    #[test]
    fn display_rank_zero_has_no_brackets() {
        assert_eq!(format!("{}", arr0(7)), "7");
    }

    #[test]
    fn debug_appends_shape() {
        assert_eq!(format!("{:?}", arr1(&[1])), "[1] shape=[1]");
    }
}
