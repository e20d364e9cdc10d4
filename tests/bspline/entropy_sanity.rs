// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use bsplinemi::estimators::approaches::bspline::{
    BsplineConfig, BsplineEntropy, KnotVector, combine_weights, entropy, joint_entropy,
    triple_joint_entropy,
};
use bsplinemi::estimators::entropy::Entropy;
use bsplinemi::estimators::{GlobalValue, JointEntropy, OptionalLocalValues};
use ndarray::{Array1, array};

use crate::test_helpers::{CONFIGS, generate_gaussian_data, generate_uniform_data, histogram_entropy_bits};

#[test]
fn order_one_matches_classical_histogram() {
    // bins of width 0.25 on [0, 1]; 0.5 sits on a knot and belongs to the upper bin
    let x = array![0.0, 0.1, 0.15, 0.5, 0.55, 0.9, 1.0];
    let kv = KnotVector::new(4, 1).unwrap();
    let w = kv.weights(x.view(), None).unwrap();
    let h = entropy(w.view(), 4).unwrap();
    assert_abs_diff_eq!(h, histogram_entropy_bits(&[3, 0, 2, 2]), epsilon = 1e-12);
}

#[test]
fn order_one_matches_classical_histogram_random() {
    let x = generate_uniform_data(500, -3.0, 9.0, 17);
    let bins = 8;
    let kv = KnotVector::new(bins, 1).unwrap();
    let w = kv.weights(x.view(), None).unwrap();

    let mut counts = vec![0usize; bins];
    for col in w.columns() {
        let bin = col.iter().position(|&v| v == 1.0).unwrap();
        counts[bin] += 1;
    }
    assert_eq!(counts.iter().sum::<usize>(), 500);
    assert_abs_diff_eq!(entropy(w.view(), bins).unwrap(), histogram_entropy_bits(&counts), epsilon = 1e-12);
}

#[test]
fn entropy_is_bounded_by_log_bins() {
    for &(bins, order) in CONFIGS {
        let x = generate_gaussian_data(400, 0.0, 1.0, 23);
        let est = BsplineEntropy::new(x, BsplineConfig::new(bins, order)).unwrap();
        let h = est.global_value();
        assert!(h >= 0.0);
        assert!(h <= (bins as f64).log2() + 1e-12);
    }
}

#[test]
fn joint_entropy_equals_entropy_of_combined_matrix() {
    let x = generate_gaussian_data(120, 0.0, 1.0, 1);
    let y = generate_uniform_data(120, 0.0, 5.0, 2);
    for &(bx, ox) in CONFIGS {
        for &(by, oy) in &[(3usize, 2usize), (6, 3), (9, 4)] {
            let wx = KnotVector::new(bx, ox).unwrap().weights(x.view(), None).unwrap();
            let wy = KnotVector::new(by, oy).unwrap().weights(y.view(), None).unwrap();
            let implicit = joint_entropy(wx.view(), wy.view(), bx, by).unwrap();
            let combined = combine_weights(wx.view(), wy.view()).unwrap();
            let explicit = entropy(combined.view(), bx * by).unwrap();
            assert_abs_diff_eq!(implicit, explicit, epsilon = 1e-10);
        }
    }
}

#[test]
fn triple_entropy_equals_entropy_of_combined_matrix() {
    let x = generate_gaussian_data(80, 0.0, 1.0, 31);
    let y = generate_gaussian_data(80, 0.0, 1.0, 32);
    let z = generate_uniform_data(80, 0.0, 1.0, 33);
    let kv = KnotVector::new(5, 3).unwrap();
    let wx = kv.weights(x.view(), None).unwrap();
    let wy = kv.weights(y.view(), None).unwrap();
    let wz = kv.weights(z.view(), None).unwrap();

    let h3 = triple_joint_entropy(wx.view(), wy.view(), wz.view()).unwrap();
    let wxy = combine_weights(wx.view(), wy.view()).unwrap();
    let wxyz = combine_weights(wxy.view(), wz.view()).unwrap();
    assert_abs_diff_eq!(h3, entropy(wxyz.view(), 125).unwrap(), epsilon = 1e-10);
    assert_abs_diff_eq!(h3, joint_entropy(wxy.view(), wz.view(), 25, 5).unwrap(), epsilon = 1e-10);
}

#[test]
fn joint_entropy_is_at_least_each_marginal() {
    let x = generate_gaussian_data(300, 0.0, 1.0, 41);
    let y = generate_gaussian_data(300, 0.0, 1.0, 42);
    let kv = KnotVector::new(6, 3).unwrap();
    let wx = kv.weights(x.view(), None).unwrap();
    let wy = kv.weights(y.view(), None).unwrap();
    let hxy = joint_entropy(wx.view(), wy.view(), 6, 6).unwrap();
    assert!(hxy + 1e-12 >= entropy(wx.view(), 6).unwrap());
    assert!(hxy + 1e-12 >= entropy(wy.view(), 6).unwrap());
}

#[test]
fn constant_vector_has_zero_entropy() {
    let est = Entropy::new_bspline(Array1::from_elem(30, -2.0), BsplineConfig::default()).unwrap();
    assert_eq!(est.global_value(), 0.0);
    assert!(!est.supports_local());
    assert!(est.local_values_opt().is_err());
}

#[test]
fn facade_joint_entropy_dispatches_by_arity() {
    let cfg = BsplineConfig::new(5, 2);
    let x = generate_gaussian_data(60, 0.0, 1.0, 51);
    let y = generate_gaussian_data(60, 0.0, 1.0, 52);
    let z = generate_gaussian_data(60, 0.0, 1.0, 53);
    let w = generate_gaussian_data(60, 0.0, 1.0, 54);
    let kv = cfg.knot_vector().unwrap();
    let wx = kv.weights(x.view(), None).unwrap();
    let wy = kv.weights(y.view(), None).unwrap();
    let wz = kv.weights(z.view(), None).unwrap();
    let ww = kv.weights(w.view(), None).unwrap();

    let h1 = Entropy::bspline_joint(&[x.clone()], cfg).unwrap();
    assert_abs_diff_eq!(h1, entropy(wx.view(), 5).unwrap(), epsilon = 1e-12);

    let h2 = BsplineEntropy::joint_entropy(&[x.clone(), y.clone()], cfg).unwrap();
    assert_abs_diff_eq!(h2, joint_entropy(wx.view(), wy.view(), 5, 5).unwrap(), epsilon = 1e-12);

    let h4 = Entropy::bspline_joint(&[x, y, z, w], cfg).unwrap();
    let wxy = combine_weights(wx.view(), wy.view()).unwrap();
    let wxyz = combine_weights(wxy.view(), wz.view()).unwrap();
    let wxyzw = combine_weights(wxyz.view(), ww.view()).unwrap();
    assert_abs_diff_eq!(h4, entropy(wxyzw.view(), 625).unwrap(), epsilon = 1e-10);

    assert!(Entropy::bspline_joint(&[], cfg).is_err());
}

#[test]
fn joint_entropy_rejects_mismatched_samples() {
    let cfg = BsplineConfig::default();
    let res = Entropy::bspline_joint(&[array![1.0, 2.0, 3.0], array![1.0, 2.0]], cfg);
    assert!(res.is_err());
}
