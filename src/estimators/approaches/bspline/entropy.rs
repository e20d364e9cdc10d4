// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use tracing::debug;

use crate::error::{BsplineError, Result, ensure_len};
use crate::estimators::approaches::bspline::config::BsplineConfig;
use crate::estimators::approaches::bspline::knots::KnotVector;
use crate::estimators::approaches::bspline::weights::{auto_weight_matrix, outer_product_rows};
use crate::estimators::traits::{GlobalValue, JointEntropy, OptionalLocalValues};

/// Accumulate `-h log2 h` over soft occupancies, skipping `h <= 0`.
fn shannon_bits<I: IntoIterator<Item = f64>>(occupancies: I) -> f64 {
    let mut h = 0.0_f64;
    for p in occupancies {
        if p > 0.0 {
            h -= p * p.log2();
        }
    }
    h
}

/// Marginal entropy (bits) of a `bins x n` weight matrix.
pub(crate) fn entropy1(w: ArrayView2<'_, f64>) -> f64 {
    let n = w.ncols() as f64;
    shannon_bits(w.sum_axis(Axis(1)).iter().map(|&s| s / n))
}

/// Joint entropy (bits) of two weight matrices with possibly different bin counts.
///
/// The joint occupancy of bins `(ix, iy)` is the sample mean of `wx[ix] * wy[iy]`,
/// i.e. one entry of `wx · wyᵀ / n`; the `(bx * by) x n` joint matrix is never built.
pub(crate) fn entropy2(wx: ArrayView2<'_, f64>, wy: ArrayView2<'_, f64>) -> f64 {
    let n = wx.ncols() as f64;
    let joint = wx.dot(&wy.t());
    shannon_bits(joint.iter().map(|&s| s / n))
}

/// Triple-joint entropy (bits), `O(bx * by * bz * n)`.
pub(crate) fn entropy3(wx: ArrayView2<'_, f64>, wy: ArrayView2<'_, f64>, wz: ArrayView2<'_, f64>) -> f64 {
    let n = wx.ncols() as f64;
    let mut h = 0.0_f64;
    for row_x in wx.outer_iter() {
        for row_y in wy.outer_iter() {
            let xy = &row_x * &row_y;
            h += shannon_bits(wz.outer_iter().map(|row_z| xy.dot(&row_z) / n));
        }
    }
    h
}

fn check_weights(w: ArrayView2<'_, f64>, num_bins: usize) -> Result<()> {
    ensure_len(num_bins, w.nrows())?;
    if w.ncols() == 0 {
        return Err(BsplineError::EmptyInput);
    }
    Ok(())
}

/// Entropy (bits) of one soft histogram.
pub fn entropy(weights: ArrayView2<'_, f64>, num_bins: usize) -> Result<f64> {
    check_weights(weights, num_bins)?;
    Ok(entropy1(weights))
}

/// Joint entropy (bits) of two soft histograms over the same samples.
///
/// Equal to `entropy(combine_weights(a, b), bins_a * bins_b)` up to rounding.
pub fn joint_entropy(
    weights_a: ArrayView2<'_, f64>,
    weights_b: ArrayView2<'_, f64>,
    bins_a: usize,
    bins_b: usize,
) -> Result<f64> {
    check_weights(weights_a, bins_a)?;
    check_weights(weights_b, bins_b)?;
    ensure_len(weights_a.ncols(), weights_b.ncols())?;
    Ok(entropy2(weights_a, weights_b))
}

/// Joint entropy (bits) of three soft histograms over the same samples.
pub fn triple_joint_entropy(
    weights_a: ArrayView2<'_, f64>,
    weights_b: ArrayView2<'_, f64>,
    weights_c: ArrayView2<'_, f64>,
) -> Result<f64> {
    if weights_a.ncols() == 0 {
        return Err(BsplineError::EmptyInput);
    }
    ensure_len(weights_a.ncols(), weights_b.ncols())?;
    ensure_len(weights_a.ncols(), weights_c.ncols())?;
    Ok(entropy3(weights_a, weights_b, weights_c))
}

/// Weight matrix of one variable together with its marginal entropy.
///
/// This is the unit of reuse: a histogram built once can enter any number of joint
/// entropies without recomputing its basis values.
#[derive(Debug, Clone)]
pub struct SoftHistogram {
    weights: Array2<f64>,
    entropy: f64,
}

impl SoftHistogram {
    /// Build from raw values, auto-scaling them to their own range.
    pub fn new(values: ArrayView1<'_, f64>, knots: &KnotVector) -> Result<Self> {
        if values.is_empty() {
            return Err(BsplineError::EmptyInput);
        }
        Ok(Self::from_values_unchecked(values, knots))
    }

    pub(crate) fn from_values_unchecked(values: ArrayView1<'_, f64>, knots: &KnotVector) -> Self {
        let weights = auto_weight_matrix(values, knots);
        let entropy = entropy1(weights.view());
        Self { weights, entropy }
    }

    /// Wrap an existing weight matrix (for instance a combined joint matrix).
    pub fn from_weights(weights: Array2<f64>) -> Result<Self> {
        if weights.ncols() == 0 || weights.nrows() == 0 {
            return Err(BsplineError::EmptyInput);
        }
        let entropy = entropy1(weights.view());
        Ok(Self { weights, entropy })
    }

    pub fn weights(&self) -> ArrayView2<'_, f64> { self.weights.view() }

    pub fn num_bins(&self) -> usize { self.weights.nrows() }

    pub fn n_samples(&self) -> usize { self.weights.ncols() }

    /// Marginal entropy in bits.
    pub fn entropy(&self) -> f64 { self.entropy }

    /// Joint entropy with another histogram over the same samples.
    pub fn joint_entropy(&self, other: &SoftHistogram) -> f64 {
        entropy2(self.weights.view(), other.weights.view())
    }

    /// `2 H(X) - H(X, X)`: the self-information used as the normalization scale.
    pub fn self_information(&self) -> f64 {
        2.0 * self.entropy - entropy2(self.weights.view(), self.weights.view())
    }

    /// Per-sample outer product with another histogram, as a new histogram.
    pub fn combine(&self, other: &SoftHistogram) -> Result<SoftHistogram> {
        ensure_len(self.n_samples(), other.n_samples())?;
        SoftHistogram::from_weights(outer_product_rows(self.weights.view(), other.weights.view()))
    }
}

/// Joint entropy of any number of histograms over the same samples.
pub(crate) fn joint_entropy_of(histograms: &[SoftHistogram]) -> Result<f64> {
    match histograms {
        [] => Err(BsplineError::EmptyInput),
        [only] => Ok(only.entropy()),
        [a, b] => {
            ensure_len(a.n_samples(), b.n_samples())?;
            Ok(a.joint_entropy(b))
        }
        [a, b, c] => triple_joint_entropy(a.weights(), b.weights(), c.weights()),
        [first, rest @ .., last] => {
            let mut acc = first.clone();
            for h in rest {
                acc = acc.combine(h)?;
            }
            ensure_len(acc.n_samples(), last.n_samples())?;
            Ok(acc.joint_entropy(last))
        }
    }
}

/// B-spline entropy estimator for one continuous variable (bits).
///
/// Global-only: local values have no natural meaning for a soft histogram.
pub struct BsplineEntropy {
    histogram: SoftHistogram,
    config: BsplineConfig,
}

impl BsplineEntropy {
    pub fn new(data: Array1<f64>, config: BsplineConfig) -> Result<Self> {
        let knots = config.knot_vector()?;
        debug!(
            n_samples = data.len(),
            num_bins = config.num_bins,
            spline_order = config.spline_order,
            "building b-spline entropy"
        );
        let histogram = SoftHistogram::new(data.view(), &knots)?;
        Ok(Self { histogram, config })
    }

    pub fn histogram(&self) -> &SoftHistogram { &self.histogram }

    pub fn config(&self) -> &BsplineConfig { &self.config }
}

impl GlobalValue for BsplineEntropy {
    fn global_value(&self) -> f64 {
        self.histogram.entropy()
    }
}

impl OptionalLocalValues for BsplineEntropy {
    fn supports_local(&self) -> bool { false }
    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Err("Local values are not defined for B-spline soft histograms.")
    }
}

impl JointEntropy for BsplineEntropy {
    type Source = Array1<f64>;
    type Params = BsplineConfig;

    /// Joint entropy of several variables, each binned with the same configuration.
    fn joint_entropy(series: &[Self::Source], params: Self::Params) -> Result<f64> {
        let knots = params.knot_vector()?;
        let histograms = series
            .iter()
            .map(|s| SoftHistogram::new(s.view(), &knots))
            .collect::<Result<Vec<_>>>()?;
        joint_entropy_of(&histograms)
    }
}
