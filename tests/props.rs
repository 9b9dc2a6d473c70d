use ndreduce::{arr1, Array, Axis, NanPolicy, ReduceOp};
use quickcheck::quickcheck;

fn finite(xs: Vec<f64>) -> Vec<f64> {
    xs.into_iter()
        .filter(|x| x.is_finite())
        .map(|x| x % 1e6)
        .collect()
}

quickcheck! {
    // Summing one axis and then the rest equals summing everything at
    // once; exact for integers.
    fn partial_sums_reassociate(xs: Vec<i64>, rows: u8) -> bool {
        let rows = (rows as usize % 4) + 1;
        let cols = xs.len() / rows;
        let data: Vec<i64> = xs.iter().take(rows * cols).map(|x| x % 1000).collect();
        let a = match Array::from_shape_vec(&[rows, cols], data) {
            Ok(a) => a,
            Err(_) => return false,
        };
        let by_rows = a.sum_axis(Axis(0)).unwrap();
        by_rows.sum() == a.sum()
            && a.reduce_all(ReduceOp::Sum, NanPolicy::Propagate).unwrap() == a.sum()
    }

    fn mean_lies_between_min_and_max(xs: Vec<f64>) -> bool {
        let xs = finite(xs);
        if xs.is_empty() {
            return true;
        }
        let a = arr1(&xs);
        let min = a.min().unwrap();
        let max = a.max().unwrap();
        let mean = a.mean(NanPolicy::Propagate).unwrap();
        let slack = 1e-9 * (1. + max.abs() + min.abs());
        min - slack <= mean && mean <= max + slack
    }

    fn median_lies_between_min_and_max(xs: Vec<f64>) -> bool {
        let xs = finite(xs);
        if xs.is_empty() {
            return true;
        }
        let a = arr1(&xs);
        let median = a.median(NanPolicy::Propagate).unwrap();
        a.min().unwrap() <= median && median <= a.max().unwrap()
    }

    fn percentile_50_is_the_median(xs: Vec<f64>) -> bool {
        let xs = finite(xs);
        if xs.is_empty() {
            return true;
        }
        let a = arr1(&xs);
        let p50 = a.percentile(50., NanPolicy::Propagate).unwrap();
        let median = a.median(NanPolicy::Propagate).unwrap();
        let slack = 1e-9 * (1. + median.abs());
        (p50 - median).abs() <= slack
    }

    fn extreme_percentiles_are_exact(xs: Vec<f64>) -> bool {
        let xs = finite(xs);
        if xs.is_empty() {
            return true;
        }
        let a = arr1(&xs);
        a.percentile(0., NanPolicy::Propagate).unwrap() == a.min().unwrap()
            && a.percentile(100., NanPolicy::Propagate).unwrap() == a.max().unwrap()
    }

    // std² round-trips to the variance for any non-degenerate sample.
    fn std_squares_to_var(xs: Vec<f64>) -> bool {
        let xs = finite(xs);
        if xs.len() < 2 {
            return true;
        }
        let a = arr1(&xs);
        let std = a.std(1., NanPolicy::Propagate).unwrap();
        let var = a.var(1., NanPolicy::Propagate).unwrap();
        (std * std - var).abs() <= 1e-9 * (1. + var.abs())
    }
}
