use defmac::defmac;
use ndreduce::{arr1, arr2, array, Array, Axis, ErrorKind, NanPolicy, ReduceOp};

// The worked example: shape (3, 4).
defmac!(mat => array![[9., 2., 1., 0.],
                      [4., 7., 3., 3.],
                      [1., 1., 9., 8.]]);

#[test]
fn collapse_axis_0_keeps_one_value_per_column() {
    let a = mat!();
    let min = a
        .reduce(ReduceOp::Min, Some(&[Axis(0)]), NanPolicy::Propagate)
        .unwrap();
    assert_eq!(min, array![1., 1., 1., 0.]);
    assert_eq!(min.shape(), &[4]);
}

#[test]
fn collapse_axis_1_keeps_one_value_per_row() {
    let a = mat!();
    let max = a.max_axis(Axis(1)).unwrap();
    assert_eq!(max, array![9., 7., 9.]);
    assert_eq!(max.shape(), &[3]);
}

#[test]
fn collapse_all_axes_gives_a_scalar() {
    let a = mat!();
    assert_eq!(a.reduce_all(ReduceOp::Sum, NanPolicy::Propagate).unwrap(), 48.);
    assert_eq!(a.sum(), 48.);

    let total = a.reduce(ReduceOp::Sum, None, NanPolicy::Propagate).unwrap();
    assert_eq!(total.ndim(), 0);
    assert_eq!(total.into_scalar().unwrap(), 48.);
}

#[test]
fn surviving_axes_preserve_order() {
    let a = array![[[1., 2.], [3., 4.]], [[5., 6.], [7., 8.]]];

    let keep_outer = a
        .reduce(ReduceOp::Sum, Some(&[Axis(1)]), NanPolicy::Propagate)
        .unwrap();
    assert_eq!(keep_outer, array![[4., 6.], [12., 14.]]);

    let keep_middle = a
        .reduce(ReduceOp::Sum, Some(&[Axis(0), Axis(2)]), NanPolicy::Propagate)
        .unwrap();
    assert_eq!(keep_middle, array![14., 22.]);

    // Axis order in the call does not matter.
    let same = a
        .reduce(ReduceOp::Sum, Some(&[Axis(2), Axis(0)]), NanPolicy::Propagate)
        .unwrap();
    assert_eq!(keep_middle, same);
}

#[test]
fn axis_errors_carry_context() {
    let a = mat!();
    let err = a.sum_axis(Axis(2)).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::AxisOutOfBounds { axis: 2, ndim: 2 }
    ));

    let err = a
        .reduce(ReduceOp::Sum, Some(&[Axis(1), Axis(1)]), NanPolicy::Propagate)
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::DuplicateAxis { axis: 1 }));
}

#[test]
fn empty_groups_return_the_identity_or_fail() {
    let empty: Array<f64> = Array::zeros(&[0]);
    assert_eq!(empty.sum(), 0.);
    assert_eq!(empty.product(), 1.);
    assert!(!empty.any());
    assert!(empty.all());
    assert!(matches!(
        empty.min().unwrap_err().kind(),
        ErrorKind::EmptyReduction { op: "min" }
    ));
    assert!(matches!(
        empty.max().unwrap_err().kind(),
        ErrorKind::EmptyReduction { op: "max" }
    ));

    let tall: Array<f64> = Array::zeros(&[0, 3]);
    // Collapsing the empty axis leaves three empty groups.
    assert_eq!(tall.sum_axis(Axis(0)).unwrap(), array![0., 0., 0.]);
    assert!(tall.min_axis(Axis(0)).is_err());
    // Collapsing the other axis leaves no groups at all: an empty result,
    // not an error.
    let min = tall.min_axis(Axis(1)).unwrap();
    assert_eq!(min.shape(), &[0]);
}

#[test]
fn nan_policy_on_sums() {
    let a = arr1(&[1., f64::NAN, 3.]);
    assert!(a
        .reduce_all(ReduceOp::Sum, NanPolicy::Propagate)
        .unwrap()
        .is_nan());
    assert_eq!(a.reduce_all(ReduceOp::Sum, NanPolicy::Skip).unwrap(), 4.);
}

#[test]
fn nan_policy_on_min_max() {
    let a = arr1(&[5., f64::NAN, 2.]);
    // A plain `<` fold would skip NaN silently; propagation is explicit.
    assert!(a.min().unwrap().is_nan());
    assert!(a.max().unwrap().is_nan());
    assert_eq!(a.reduce_all(ReduceOp::Min, NanPolicy::Skip).unwrap(), 2.);

    // Skipping everything leaves the missing sentinel, not an error.
    let gone = arr1(&[f64::NAN, f64::NAN]);
    assert!(gone
        .reduce_all(ReduceOp::Min, NanPolicy::Skip)
        .unwrap()
        .is_nan());
}

#[test]
fn nan_policy_per_lane() {
    let a = array![[1., f64::NAN], [3., 4.]];
    let sums = a
        .reduce(ReduceOp::Sum, Some(&[Axis(1)]), NanPolicy::Skip)
        .unwrap();
    assert_eq!(sums, array![1., 7.]);

    let sums = a
        .reduce(ReduceOp::Sum, Some(&[Axis(1)]), NanPolicy::Propagate)
        .unwrap();
    assert!(sums[0].is_nan());
    assert_eq!(sums[1], 7.);
}

#[test]
fn any_all_treat_nonzero_as_true() {
    let a = arr1(&[0, 0, 3]);
    assert!(a.any());
    assert!(!a.all());
    assert!(arr1(&[1, 2, 3]).all());

    let b = arr2(&[[0, 1], [0, 0]]);
    assert_eq!(b.any_axis(Axis(1)).unwrap(), arr1(&[true, false]));
    assert_eq!(b.all_axis(Axis(1)).unwrap(), arr1(&[false, false]));
}

#[test]
fn bool_arrays_have_direct_any_all() {
    let a = arr1(&[true, false, true]);
    assert!(a.any());
    assert!(!a.all());
    let empty = arr1(&[] as &[bool]);
    assert!(!empty.any());
    assert!(empty.all());
}

#[test]
fn product_reduces_along_axes() {
    let a = arr2(&[[1., 2.], [3., 4.]]);
    assert_eq!(a.product(), 24.);
    assert_eq!(a.product_axis(Axis(0)).unwrap(), arr1(&[3., 8.]));
}

#[test]
fn argmax_ties_break_to_the_first_occurrence() {
    assert_eq!(arr1(&[3, 5, 5, 2]).argmax().unwrap(), 1);
    assert_eq!(arr1(&[3, 1, 1, 2]).argmin().unwrap(), 1);
}

#[test]
fn argmin_argmax_axis() {
    let a = mat!();
    assert_eq!(a.argmin_axis(Axis(0)).unwrap(), arr1(&[2, 2, 0, 0]));
    assert_eq!(a.argmax_axis(Axis(1)).unwrap(), arr1(&[0, 1, 2]));
}

#[test]
fn argmin_of_empty_fails() {
    let empty = arr1(&[] as &[f64]);
    assert!(matches!(
        empty.argmin().unwrap_err().kind(),
        ErrorKind::EmptyReduction { op: "argmin" }
    ));
}

#[test]
fn arg_extrema_stop_at_the_first_missing_value() {
    let a = arr1(&[2., f64::NAN, 0.]);
    assert_eq!(a.argmin().unwrap(), 1);
    assert_eq!(a.argmax().unwrap(), 1);

    let b = array![[1., f64::NAN], [0., 5.]];
    assert_eq!(b.argmax_axis(Axis(1)).unwrap(), arr1(&[1, 1]));
}

#[test]
fn sum_fast_path_matches_the_fold() {
    let a: Array<f64> = Array::linspace(0., 1., 1000);
    let folded = a.reduce_all(ReduceOp::Sum, NanPolicy::Propagate).unwrap();
    assert!((a.sum() - folded).abs() < 1e-9);
}
