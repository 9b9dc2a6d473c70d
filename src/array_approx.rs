// Copyright 2025-2026 ndreduce developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature = "approx")]
mod approx_impls {
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    use crate::Array;

    /// **Requires crate feature `"approx"`.**
    impl<A, B> AbsDiffEq<Array<B>> for Array<A>
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &Array<B>, epsilon: A::Epsilon) -> bool {
            self.shape() == other.shape()
                && self
                    .iter()
                    .zip(other.iter())
                    .all(|(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B> RelativeEq<Array<B>> for Array<A>
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
    {
        fn default_max_relative() -> A::Epsilon {
            A::default_max_relative()
        }

        fn relative_eq(
            &self,
            other: &Array<B>,
            epsilon: A::Epsilon,
            max_relative: A::Epsilon,
        ) -> bool {
            self.shape() == other.shape()
                && self
                    .iter()
                    .zip(other.iter())
                    .all(|(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B> UlpsEq<Array<B>> for Array<A>
    where
        A: UlpsEq<B>,
        A::Epsilon: Clone,
    {
        fn default_max_ulps() -> u32 {
            A::default_max_ulps()
        }

        fn ulps_eq(&self, other: &Array<B>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
            self.shape() == other.shape()
                && self
                    .iter()
                    .zip(other.iter())
                    .all(|(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
        }
    }

}
