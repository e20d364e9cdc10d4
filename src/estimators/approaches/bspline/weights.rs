// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::error::{BsplineError, Result, ensure_len};
use crate::estimators::approaches::bspline::basis::basis_function;
use crate::estimators::approaches::bspline::config::validate_bins;
use crate::estimators::approaches::bspline::knots::KnotVector;
use crate::estimators::approaches::bspline::normalize::{data_range, normalize, rescale};

/// Soft-histogram weight matrix (`num_bins x n`) of raw `values`.
///
/// Samples are first rescaled onto `[0, 1]` with `domain` (or the data range), then
/// each column holds the basis values of that sample across all bins.
pub fn weight_matrix(
    values: ArrayView1<'_, f64>,
    knots: &KnotVector,
    domain: Option<(f64, f64)>,
) -> Result<Array2<f64>> {
    let z = normalize(values, domain)?;
    Ok(normalized_weight_matrix(z.view(), knots.as_slice(), knots.spline_order(), knots.num_bins()))
}

/// Weight matrix of samples already scaled to `[0, 1]`.
pub fn normalized_weight_matrix(
    z: ArrayView1<'_, f64>,
    knots: &[f64],
    spline_order: usize,
    num_bins: usize,
) -> Array2<f64> {
    let mut w = Array2::zeros((num_bins, z.len()));
    for (s, &t) in z.iter().enumerate() {
        for bin in 0..num_bins {
            w[(bin, s)] = basis_function(bin, spline_order, t, knots, num_bins);
        }
    }
    w
}

/// Weight matrix from an auto-scaled, non-empty vector; dimensions are assumed checked.
pub(crate) fn auto_weight_matrix(values: ArrayView1<'_, f64>, knots: &KnotVector) -> Array2<f64> {
    let (min, max) = data_range(values);
    let z = rescale(values, min, max);
    normalized_weight_matrix(z.view(), knots.as_slice(), knots.spline_order(), knots.num_bins())
}

/// Weight matrix for `values` against an arbitrary caller-supplied knot sequence.
///
/// `knots` must have exactly `num_bins + spline_order` entries.
pub fn weights(
    values: ArrayView1<'_, f64>,
    knots: ArrayView1<'_, f64>,
    spline_order: usize,
    num_bins: usize,
    domain: Option<(f64, f64)>,
) -> Result<Array2<f64>> {
    validate_bins(num_bins, spline_order)?;
    ensure_len(num_bins + spline_order, knots.len())?;
    let z = normalize(values, domain)?;
    let knots = knots.to_vec();
    Ok(normalized_weight_matrix(z.view(), &knots, spline_order, num_bins))
}

/// Joint weight matrix: per-sample outer product of two marginal weight matrices.
///
/// Row `ix * by + iy` of the result holds `wx[ix, s] * wy[iy, s]`, so the result has
/// `bx * by` rows and the shared `n` columns.
pub fn combine_weights(wx: ArrayView2<'_, f64>, wy: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
    ensure_len(wx.ncols(), wy.ncols())?;
    if wx.ncols() == 0 {
        return Err(BsplineError::EmptyInput);
    }
    Ok(outer_product_rows(wx, wy))
}

pub(crate) fn outer_product_rows(wx: ArrayView2<'_, f64>, wy: ArrayView2<'_, f64>) -> Array2<f64> {
    let by = wy.nrows();
    let mut w = Array2::zeros((wx.nrows() * by, wx.ncols()));
    for (ix, row_x) in wx.outer_iter().enumerate() {
        for (iy, row_y) in wy.outer_iter().enumerate() {
            let mut out = w.row_mut(ix * by + iy);
            out.assign(&(&row_x * &row_y));
        }
    }
    w
}
