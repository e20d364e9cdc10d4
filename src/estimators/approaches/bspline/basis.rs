// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Knot spans narrower than this are treated as empty.
pub const KNOT_TOLERANCE: f64 = 1e-10;

/// Value of the `i`-th B-spline basis function of order `p` at `t` (Cox–de Boor).
///
/// Orders start at 1 (piecewise constant). Order 0 has no basis and yields 0, as does
/// any `i` for which `knots` holds fewer than `i + p + 1` entries. The order-1 indicator
/// uses half-open spans `[knots[i], knots[i+1])`, except that the last bin
/// (`i + 1 == num_bins`) also owns the final knot so the upper domain boundary is not
/// dropped. Spans narrower than [`KNOT_TOLERANCE`] contribute nothing, and rounding noise
/// below zero is clamped to 0.
///
/// Recursion depth equals `p`, which is the (small) spline order.
pub fn basis_function(i: usize, p: usize, t: f64, knots: &[f64], num_bins: usize) -> f64 {
    if p == 0 || i + p >= knots.len() {
        return 0.0;
    }
    if p == 1 {
        let in_span = t >= knots[i] && t < knots[i + 1] && knots[i] < knots[i + 1];
        let closes_domain = (t - knots[i + 1]).abs() < KNOT_TOLERANCE && i + 1 == num_bins;
        return if in_span || closes_domain { 1.0 } else { 0.0 };
    }

    let d1 = knots[i + p - 1] - knots[i];
    let d2 = knots[i + p] - knots[i + 1];
    if d1 < KNOT_TOLERANCE && d2 < KNOT_TOLERANCE {
        return 0.0;
    }

    let e1 = if d1 < KNOT_TOLERANCE {
        0.0
    } else {
        (t - knots[i]) / d1 * basis_function(i, p - 1, t, knots, num_bins)
    };
    let e2 = if d2 < KNOT_TOLERANCE {
        0.0
    } else {
        (knots[i + p] - t) / d2 * basis_function(i + 1, p - 1, t, knots, num_bins)
    };

    let value = e1 + e2;
    if value < 0.0 { 0.0 } else { value }
}
