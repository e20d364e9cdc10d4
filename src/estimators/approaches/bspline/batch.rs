// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1, ArrayView2};
use tracing::{debug, trace};

use crate::error::{BsplineError, Result, ensure_len};
use crate::estimators::approaches::bspline::config::BsplineConfig;
use crate::estimators::approaches::bspline::entropy::SoftHistogram;
use crate::estimators::approaches::bspline::knots::KnotVector;
use crate::estimators::approaches::bspline::mutual_information::normalize_mi;
use crate::estimators::utils::stats::product_moment;

/// Everything about the reference vector that does not depend on the row it is paired with.
///
/// Built once per batch and only ever read afterwards, so it can be shared by `&`
/// across worker threads.
#[derive(Debug, Clone)]
pub struct ReferenceContext {
    knots: KnotVector,
    values: Array1<f64>,
    histogram: SoftHistogram,
    self_information: f64,
}

impl ReferenceContext {
    pub fn new(reference: ArrayView1<'_, f64>, config: &BsplineConfig) -> Result<Self> {
        let knots = config.knot_vector()?;
        let histogram = SoftHistogram::new(reference, &knots)?;
        let self_information = histogram.self_information();
        Ok(Self { knots, values: reference.to_owned(), histogram, self_information })
    }

    pub fn n_samples(&self) -> usize { self.values.len() }

    pub fn knots(&self) -> &KnotVector { &self.knots }

    pub fn histogram(&self) -> &SoftHistogram { &self.histogram }

    /// `2 H(ref) - H(ref, ref)`.
    pub fn self_information(&self) -> f64 { self.self_information }

    /// MI between the reference and one row; identical to the pairwise estimator.
    ///
    /// The row must have `n_samples()` entries.
    pub fn mutual_information_with(&self, row: ArrayView1<'_, f64>, normalize: bool, sign_correct: bool) -> f64 {
        let hy = SoftHistogram::from_values_unchecked(row, &self.knots);
        let mut mi = self.histogram.entropy() + hy.entropy() - self.histogram.joint_entropy(&hy);
        if normalize {
            mi = normalize_mi(mi, self.self_information, hy.self_information());
        }
        if sign_correct && product_moment(self.values.view(), row) < 0.0 {
            mi = -mi;
        }
        mi
    }
}

/// Row-wise batch MI: one reference vector against every row of a matrix.
///
/// `global_values()[i]` equals `BsplineMutualInformation::new(reference, data.row(i))`
/// for every row; only the reference's weights and entropies are computed once instead
/// of once per row. The matrix is borrowed, never copied. With the `parallel` feature
/// rows are evaluated on the rayon pool, and the output order still mirrors the input
/// row order.
pub struct BsplineMutualInformationBatchRows<'a> {
    context: ReferenceContext,
    data: ArrayView2<'a, f64>,
    normalize: bool,
    sign_correct: bool,
}

impl<'a> BsplineMutualInformationBatchRows<'a> {
    pub fn new(reference: ArrayView1<'_, f64>, data: ArrayView2<'a, f64>, config: &BsplineConfig) -> Result<Self> {
        ensure_len(reference.len(), data.ncols())?;
        let context = ReferenceContext::new(reference, config)?;
        debug!(
            rows = data.nrows(),
            n_samples = context.n_samples(),
            num_bins = config.num_bins,
            spline_order = config.spline_order,
            "prepared b-spline batch reference"
        );
        Ok(Self { context, data, normalize: config.normalize, sign_correct: config.sign_correct })
    }

    pub fn context(&self) -> &ReferenceContext { &self.context }

    pub fn nrows(&self) -> usize { self.data.nrows() }

    /// MI for every row, in row order.
    pub fn global_values(&self) -> Array1<f64> {
        Array1::from(self.row_values())
    }

    fn row_value(&self, i: usize, row: ArrayView1<'_, f64>) -> f64 {
        let mi = self.context.mutual_information_with(row, self.normalize, self.sign_correct);
        trace!(row = i, mi, "batch row");
        mi
    }

    #[cfg(not(feature = "parallel"))]
    fn row_values(&self) -> Vec<f64> {
        self.data
            .outer_iter()
            .enumerate()
            .map(|(i, row)| self.row_value(i, row))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn row_values(&self) -> Vec<f64> {
        use rayon::prelude::*;
        let rows: Vec<ArrayView1<'_, f64>> = self.data.outer_iter().collect();
        rows.par_iter()
            .enumerate()
            .map(|(i, row)| self.row_value(i, row.view()))
            .collect()
    }
}

/// MI between `reference` and each row of `matrix` (`m x n`), returned in row order.
pub fn batch_mutual_information(
    reference: ArrayView1<'_, f64>,
    matrix: ArrayView2<'_, f64>,
    num_bins: usize,
    spline_order: usize,
    normalize: bool,
    sign_correct: bool,
) -> Result<Array1<f64>> {
    let config = BsplineConfig { num_bins, spline_order, normalize, sign_correct };
    if reference.is_empty() {
        return Err(BsplineError::EmptyInput);
    }
    let batch = BsplineMutualInformationBatchRows::new(reference, matrix, &config)?;
    Ok(batch.global_values())
}
