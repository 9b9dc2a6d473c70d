// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::{One, Zero};

/// Elements that can be stored in an [`Array`](crate::Array).
///
/// The trait also defines the element type's missing-value convention:
/// floating-point types use IEEE NaN as the missing sentinel, while integer
/// and boolean types have no missing values at all (`is_missing` is always
/// false and there is no sentinel). This is what lets
/// [`NanPolicy::Skip`](crate::NanPolicy) be a no-op on integer arrays
/// instead of an error.
pub trait Element: Clone + PartialOrd {
    /// The value's truth value: nonzero for numeric types, identity for
    /// `bool`. NaN is nonzero and therefore true.
    fn is_truthy(&self) -> bool;

    /// True if the value is the missing-value sentinel.
    #[inline]
    fn is_missing(&self) -> bool {
        false
    }

    /// The missing-value sentinel itself, for types that have one.
    #[inline]
    fn missing() -> Option<Self> {
        None
    }
}

macro_rules! impl_int_element {
    ($($t:ty)*) => {
        $(
            impl Element for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_int_element!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl Element for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Element for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.
    }

    #[inline]
    fn is_missing(&self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn missing() -> Option<Self> {
        Some(f32::NAN)
    }
}

impl Element for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.
    }

    #[inline]
    fn is_missing(&self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn missing() -> Option<Self> {
        Some(f64::NAN)
    }
}

/// Elements that support the closed set of reduction operators
/// ([`ReduceOp`](crate::ReduceOp)).
///
/// `Zero` and `One` provide the identity elements of sum, product and the
/// logical reductions. The blanket impl covers all primitive numeric
/// element types; `bool` is not a member, so boolean arrays keep the
/// scalar `any`/`all` but not the operator engine.
pub trait ReduceElem: Element + Zero + One {}

impl<T> ReduceElem for T where T: Element + Zero + One {}
