// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use bsplinemi::estimators::approaches::bspline::{
    KnotVector, combine_weights, knot_vector, normalized_weight_matrix, weight_matrix, weights,
};
use bsplinemi::BsplineError;
use ndarray::{Array1, Axis, array};

use crate::test_helpers::{CONFIGS, generate_gaussian_data};

#[test]
fn columns_sum_to_one_for_every_config() {
    let x = generate_gaussian_data(300, 2.0, 3.0, 7);
    for &(bins, order) in CONFIGS {
        let kv = KnotVector::new(bins, order).unwrap();
        let w = weight_matrix(x.view(), &kv, None).unwrap();
        assert_eq!(w.dim(), (bins, 300));
        assert!(w.iter().all(|&v| v >= 0.0 && v.is_finite()));
        for s in w.sum_axis(Axis(0)).iter() {
            assert_abs_diff_eq!(*s, 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn order_one_gives_one_hot_columns() {
    let x = generate_gaussian_data(200, 0.0, 1.0, 11);
    let kv = KnotVector::new(7, 1).unwrap();
    let w = weight_matrix(x.view(), &kv, None).unwrap();
    for col in w.axis_iter(Axis(1)) {
        assert_eq!(col.iter().filter(|&&v| v == 1.0).count(), 1);
        assert_eq!(col.iter().filter(|&&v| v == 0.0).count(), 6);
    }
}

#[test]
fn constant_vector_concentrates_in_first_bin() {
    let x = Array1::from_elem(25, 4.2);
    for &(bins, order) in CONFIGS {
        let kv = KnotVector::new(bins, order).unwrap();
        let w = weight_matrix(x.view(), &kv, None).unwrap();
        assert!(w.iter().all(|v| v.is_finite()));
        for s in 0..25 {
            assert_abs_diff_eq!(w[(0, s)], 1.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(w.sum(), 25.0, epsilon = 1e-9);
    }
}

#[test]
fn explicit_domain_matches_prenormalized_samples() {
    let x = array![1.0, 3.0, 4.0, 6.0, 3.0, 6.0, 7.0, 3.0, 2.0];
    let kv = KnotVector::new(5, 3).unwrap();
    let with_domain = weight_matrix(x.view(), &kv, Some((0.0, 10.0))).unwrap();
    let z = x.mapv(|v| v / 10.0);
    let direct = normalized_weight_matrix(z.view(), kv.as_slice(), 3, 5);
    for (a, b) in with_domain.iter().zip(direct.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }
}

#[test]
fn inverted_domain_is_rejected() {
    let x = array![1.0, 3.0, 4.0];
    let kv = KnotVector::new(5, 3).unwrap();
    let res = weight_matrix(x.view(), &kv, Some((10.0, 0.0)));
    assert!(matches!(res, Err(BsplineError::InvalidDomain { .. })));
}

#[test]
fn free_function_matches_knot_vector_method() {
    let x = generate_gaussian_data(50, 0.0, 1.0, 3);
    let knots = knot_vector(6, 3).unwrap();
    let a = weights(x.view(), knots.view(), 3, 6, None).unwrap();
    let b = KnotVector::new(6, 3).unwrap().weights(x.view(), None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_values_are_rejected() {
    let kv = KnotVector::new(6, 3).unwrap();
    let x: Array1<f64> = Array1::zeros(0);
    assert!(matches!(weight_matrix(x.view(), &kv, None), Err(BsplineError::EmptyInput)));
}

#[test]
fn combined_rows_are_outer_products() {
    let x = generate_gaussian_data(40, 0.0, 1.0, 5);
    let y = generate_gaussian_data(40, 1.0, 2.0, 6);
    let wx = KnotVector::new(4, 2).unwrap().weights(x.view(), None).unwrap();
    let wy = KnotVector::new(5, 3).unwrap().weights(y.view(), None).unwrap();
    let w = combine_weights(wx.view(), wy.view()).unwrap();
    assert_eq!(w.dim(), (20, 40));
    for ix in 0..4 {
        for iy in 0..5 {
            for s in 0..40 {
                assert_abs_diff_eq!(w[(ix * 5 + iy, s)], wx[(ix, s)] * wy[(iy, s)], epsilon = 1e-15);
            }
        }
    }
    // joint columns still form a partition of unity
    for s in w.sum_axis(Axis(0)).iter() {
        assert_abs_diff_eq!(*s, 1.0, epsilon = 1e-12);
    }
}
