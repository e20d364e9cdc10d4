// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView1};

use crate::error::Result;
use crate::estimators::approaches::bspline::config::validate_bins;
use crate::estimators::approaches::bspline::weights::weight_matrix;

/// Clamped, uniformly spaced knot sequence on `[0, 1]`.
///
/// Holds `num_bins + spline_order` knots: `spline_order` zeros, the interior knots
/// `k / (num_bins - spline_order + 1)`, then `spline_order` ones. Built once per
/// configuration and reusable across any number of weight-matrix evaluations.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector {
    knots: Vec<f64>,
    num_bins: usize,
    spline_order: usize,
}

impl KnotVector {
    pub fn new(num_bins: usize, spline_order: usize) -> Result<Self> {
        validate_bins(num_bins, spline_order)?;
        let interior = num_bins - spline_order;
        let mut knots = vec![0.0; spline_order];
        knots.extend((1..=interior).map(|k| k as f64 / (interior + 1) as f64));
        knots.resize(num_bins + spline_order, 1.0);
        Ok(Self { knots, num_bins, spline_order })
    }

    pub fn num_bins(&self) -> usize { self.num_bins }

    pub fn spline_order(&self) -> usize { self.spline_order }

    pub fn as_slice(&self) -> &[f64] { &self.knots }

    pub fn view(&self) -> ArrayView1<'_, f64> { ArrayView1::from(self.knots.as_slice()) }

    pub fn into_array(self) -> Array1<f64> { Array1::from(self.knots) }

    /// Soft-assignment weights of `values` (`num_bins x n`), rescaled with `domain`
    /// or with the data's own range when `domain` is `None`.
    pub fn weights(&self, values: ArrayView1<'_, f64>, domain: Option<(f64, f64)>) -> Result<Array2<f64>> {
        weight_matrix(values, self, domain)
    }
}

/// Clamped knot vector for `(num_bins, spline_order)`.
pub fn knot_vector(num_bins: usize, spline_order: usize) -> Result<Array1<f64>> {
    KnotVector::new(num_bins, spline_order).map(KnotVector::into_array)
}
