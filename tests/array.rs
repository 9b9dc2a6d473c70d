use itertools::enumerate;
use ndreduce::{arr0, arr1, arr2, arr3, array, Array, Axis, ErrorKind};

#[test]
fn macro_shapes() {
    let a1 = array![1., 2., 3.];
    assert_eq!(a1.shape(), &[3]);
    let a2 = array![[1., 2.], [3., 4.], [5., 6.]];
    assert_eq!(a2.shape(), &[3, 2]);
    let a3 = array![[[1, 2], [3, 4]], [[5, 6], [7, 8]]];
    assert_eq!(a3.shape(), &[2, 2, 2]);
    assert_eq!(a3, arr3(&[[[1, 2], [3, 4]], [[5, 6], [7, 8]]]));
}

#[test]
fn from_shape_vec_checks_element_count() {
    let a = Array::from_shape_vec(&[2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a.shape(), &[2, 3]);
    assert_eq!(a.len(), 6);

    let err = Array::from_shape_vec(&[2, 2], vec![1, 2, 3]).unwrap_err();
    match err.kind() {
        ErrorKind::IncompatibleShape { shape, len } => {
            assert_eq!(&shape[..], &[2, 2]);
            assert_eq!(*len, 3);
        }
        other => panic!("unexpected error kind {:?}", other),
    }
}

#[test]
fn from_rows_rejects_jagged_input() {
    let a = Array::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    assert_eq!(a, arr2(&[[1, 2, 3], [4, 5, 6]]));

    let err = Array::from_rows(&[vec![1, 2, 3], vec![4, 5]]).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::JaggedInput {
            row: 1,
            expected: 3,
            got: 2
        }
    ));

    let empty: Array<i32> = Array::from_rows(&[]).unwrap();
    assert_eq!(empty.shape(), &[0, 0]);
}

#[test]
fn storage_is_row_major() {
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    assert_eq!(a.as_slice(), &[1, 2, 3, 4, 5, 6]);
    // The last axis varies fastest.
    for (i, (coord, &elt)) in enumerate(a.indexed_iter()) {
        assert_eq!(coord, [i / 3, i % 3]);
        assert_eq!(elt as usize, i + 1);
    }
}

#[test]
fn indexing() {
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    assert_eq!(a[[0, 0]], 1);
    assert_eq!(a[[1, 2]], 6);
    assert_eq!(a.get(&[1, 2]), Some(&6));
    assert_eq!(a.get(&[2, 0]), None);
    assert_eq!(a.get(&[0]), None);

    let v = arr1(&[10, 20, 30]);
    assert_eq!(v[1], 20);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn indexing_out_of_bounds_panics() {
    let a = arr2(&[[1, 2], [3, 4]]);
    let _ = a[[0, 2]];
}

#[test]
fn index_axis_materializes_subviews() {
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    assert_eq!(a.index_axis(Axis(0), 1), arr1(&[4, 5, 6]));
    assert_eq!(a.index_axis(Axis(1), 2), arr1(&[3, 6]));

    let a3 = array![[[1, 2], [3, 4]], [[5, 6], [7, 8]]];
    assert_eq!(a3.index_axis(Axis(1), 0), arr2(&[[1, 2], [5, 6]]));
}

#[test]
fn equality_requires_matching_shape_and_elements() {
    let a = arr2(&[[1., 2.], [3., 4.]]);
    let b = Array::from_shape_vec(&[4], vec![1., 2., 3., 4.]).unwrap();
    assert_ne!(a, b);
    assert_eq!(a, a.clone());

    // NaN is never equal to NaN.
    let n = arr1(&[f64::NAN]);
    assert_ne!(n, n.clone());
}

#[test]
fn into_scalar_requires_rank_zero() {
    assert_eq!(arr0(9).into_scalar().unwrap(), 9);
    let err = arr1(&[9]).into_scalar().unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::NotScalar { ndim: 1 }));
}

#[test]
fn mapv_is_the_upcast_path() {
    let counts = arr1(&[1_i64, 2, 3]);
    let floats = counts.mapv(|x| x as f64);
    assert_eq!(floats, arr1(&[1., 2., 3.]));
    assert_eq!(floats.sum(), 6.);
}

#[test]
fn linspace_and_range() {
    assert_eq!(Array::linspace(0., 1., 5), arr1(&[0., 0.25, 0.5, 0.75, 1.0]));
    assert_eq!(Array::range(0., 4., 1.), arr1(&[0., 1., 2., 3.]));
}

#[test]
fn zeros_and_from_elem() {
    let z: Array<f64> = Array::zeros(&[2, 3]);
    assert_eq!(z.shape(), &[2, 3]);
    assert_eq!(z.sum(), 0.);
    assert_eq!(Array::from_elem(&[2], 7), arr1(&[7, 7]));
}

#[test]
fn from_shape_fn_visits_row_major() {
    let a = Array::from_shape_fn(&[2, 3], |ix| ix[0] * 3 + ix[1]);
    assert_eq!(a.as_slice(), &[0, 1, 2, 3, 4, 5]);
}
