// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView1;

/// `n Σxy - Σx Σy`: an unscaled covariance whose sign matches Pearson's r.
///
/// Both views must have the same length.
pub fn product_moment(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len() as f64;
    n * x.dot(&y) - x.sum() * y.sum()
}
