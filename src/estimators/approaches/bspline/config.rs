// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{BsplineError, Result};
use crate::estimators::approaches::bspline::knots::KnotVector;

/// Estimator configuration shared by every B-spline entropy and MI estimator.
///
/// Defaults follow the classic B-spline MI setup: 6 bins, spline order 3 (quadratic
/// basis), normalization on and sign correction off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BsplineConfig {
    /// Number of soft-histogram bins per variable.
    pub num_bins: usize,
    /// B-spline order (degree + 1). Order 1 is a hard histogram.
    pub spline_order: usize,
    /// Divide MI by the larger self-information of the two marginals.
    pub normalize: bool,
    /// Negate MI when the two variables covary negatively.
    pub sign_correct: bool,
}

impl Default for BsplineConfig {
    fn default() -> Self {
        Self { num_bins: 6, spline_order: 3, normalize: true, sign_correct: false }
    }
}

impl BsplineConfig {
    pub fn new(num_bins: usize, spline_order: usize) -> Self {
        Self { num_bins, spline_order, ..Self::default() }
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self { self.normalize = normalize; self }

    pub fn with_sign_correct(mut self, sign_correct: bool) -> Self { self.sign_correct = sign_correct; self }

    /// Check `num_bins >= spline_order >= 1`.
    pub fn validate(&self) -> Result<()> {
        validate_bins(self.num_bins, self.spline_order)
    }

    /// Build the clamped knot vector for this bin count and order.
    pub fn knot_vector(&self) -> Result<KnotVector> {
        KnotVector::new(self.num_bins, self.spline_order)
    }
}

pub(crate) fn validate_bins(num_bins: usize, spline_order: usize) -> Result<()> {
    if num_bins == 0 || spline_order == 0 || num_bins < spline_order {
        return Err(BsplineError::InvalidBinConfig { num_bins, spline_order });
    }
    Ok(())
}
