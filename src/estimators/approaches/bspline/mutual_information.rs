// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};
use tracing::debug;

use crate::error::{BsplineError, Result, ensure_len};
use crate::estimators::approaches::bspline::config::BsplineConfig;
use crate::estimators::approaches::bspline::entropy::{SoftHistogram, joint_entropy_of};
use crate::estimators::approaches::bspline::knots::KnotVector;
use crate::estimators::traits::{
    ConditionalMutualInformationTrait, GlobalValue, MutualInformationEstimator,
    MutualInformationTrait, OptionalLocalValues,
};
use crate::estimators::utils::stats::product_moment;

/// Divide `mi` by the larger of the two self-informations; a zero scale means "divide by 1".
pub(crate) fn normalize_mi(mi: f64, self_info_x: f64, self_info_y: f64) -> f64 {
    let mut scale = self_info_x;
    if self_info_y > scale {
        scale = self_info_y;
    }
    if scale == 0.0 {
        scale = 1.0;
    }
    mi / scale
}

fn check_pair(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Result<()> {
    ensure_len(x.len(), y.len())?;
    if x.is_empty() {
        return Err(BsplineError::EmptyInput);
    }
    Ok(())
}

/// Pairwise B-spline mutual information estimator.
///
/// `I(X; Y) = H(X) + H(Y) - H(X, Y)` over soft histograms, in bits. When normalized the
/// value is divided by `max(2H(X) - H(X,X), 2H(Y) - H(Y,Y))`, which makes `I(X; X) = 1`.
/// The ratio is not strictly bounded to `[0, 1]` because of the binning approximation.
/// With sign correction the result is negated whenever the samples covary negatively.
///
/// Each variable may carry its own knot vector, so bin counts and spline orders are
/// allowed to differ between `X` and `Y`.
pub struct BsplineMutualInformation {
    x: SoftHistogram,
    y: SoftHistogram,
    normalize: bool,
    negative: bool,
}

impl BsplineMutualInformation {
    /// Both variables share one knot vector built from `config`.
    pub fn new(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>, config: &BsplineConfig) -> Result<Self> {
        let knots = config.knot_vector()?;
        Self::with_knots(x, y, &knots, &knots, config.normalize, config.sign_correct)
    }

    /// Each variable gets its own binning.
    pub fn with_knots(
        x: ArrayView1<'_, f64>,
        y: ArrayView1<'_, f64>,
        knots_x: &KnotVector,
        knots_y: &KnotVector,
        normalize: bool,
        sign_correct: bool,
    ) -> Result<Self> {
        check_pair(x, y)?;
        debug!(
            n_samples = x.len(),
            bins_x = knots_x.num_bins(),
            bins_y = knots_y.num_bins(),
            normalize,
            sign_correct,
            "building b-spline mutual information"
        );
        let hx = SoftHistogram::from_values_unchecked(x, knots_x);
        let hy = SoftHistogram::from_values_unchecked(y, knots_y);
        let negative = sign_correct && product_moment(x, y) < 0.0;
        Ok(Self { x: hx, y: hy, normalize, negative })
    }

    /// Unnormalized, unsigned MI in bits.
    pub fn raw_value(&self) -> f64 {
        self.x.entropy() + self.y.entropy() - self.x.joint_entropy(&self.y)
    }
}

impl GlobalValue for BsplineMutualInformation {
    fn global_value(&self) -> f64 {
        let mut mi = self.raw_value();
        if self.normalize {
            mi = normalize_mi(mi, self.x.self_information(), self.y.self_information());
        }
        if self.negative { -mi } else { mi }
    }
}

impl OptionalLocalValues for BsplineMutualInformation {
    fn supports_local(&self) -> bool { false }
    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Err("Local values are not defined for B-spline mutual information.")
    }
}

impl MutualInformationEstimator for BsplineMutualInformation {}

impl MutualInformationTrait for BsplineMutualInformation {
    type Source = Array1<f64>;
    type Params = BsplineConfig;

    /// Two series give the pairwise estimate honoring the normalize and sign flags.
    /// More series give the unnormalized total correlation `Σ H(Xi) - H(X1, ..., Xn)`.
    fn mutual_information(series: &[Self::Source], params: Self::Params) -> Result<f64> {
        match series {
            [] | [_] => Err(BsplineError::InvalidDimensions { expected: 2, actual: series.len() }),
            [x, y] => Ok(Self::new(x.view(), y.view(), &params)?.global_value()),
            _ => {
                let histograms = histograms_for(series, &params)?;
                let marginals: f64 = histograms.iter().map(SoftHistogram::entropy).sum();
                Ok(marginals - joint_entropy_of(&histograms)?)
            }
        }
    }
}

impl ConditionalMutualInformationTrait for BsplineMutualInformation {
    type Source = Array1<f64>;
    type Cond = Array1<f64>;
    type Params = BsplineConfig;

    /// `I(X1; ...; Xn | Z) = Σ H(Xi, Z) - H(X1, ..., Xn, Z) - (n - 1) H(Z)`, unnormalized.
    fn cmi(series: &[Self::Source], cond: &Self::Cond, params: Self::Params) -> Result<f64> {
        if series.is_empty() {
            return Err(BsplineError::InvalidDimensions { expected: 1, actual: 0 });
        }
        let mut histograms = histograms_for(series, &params)?;
        let knots = params.knot_vector()?;
        ensure_len(histograms[0].n_samples(), cond.len())?;
        let hz = SoftHistogram::new(cond.view(), &knots)?;

        let sum_h_xz: f64 = histograms.iter().map(|h| h.joint_entropy(&hz)).sum();
        let n = histograms.len() as f64;
        histograms.push(hz.clone());
        let h_all = joint_entropy_of(&histograms)?;
        Ok(sum_h_xz - h_all - (n - 1.0) * hz.entropy())
    }
}

fn histograms_for(series: &[Array1<f64>], config: &BsplineConfig) -> Result<Vec<SoftHistogram>> {
    let knots = config.knot_vector()?;
    let n = series.first().map_or(0, |s| s.len());
    series
        .iter()
        .map(|s| {
            ensure_len(n, s.len())?;
            SoftHistogram::new(s.view(), &knots)
        })
        .collect()
}

/// Mutual information between two vectors, in bits unless `normalize` is set.
pub fn mutual_information(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    num_bins: usize,
    spline_order: usize,
    normalize: bool,
    sign_correct: bool,
) -> Result<f64> {
    let config = BsplineConfig { num_bins, spline_order, normalize, sign_correct };
    Ok(BsplineMutualInformation::new(x, y, &config)?.global_value())
}

/// Mutual information between the joint variable `(X, Y)` and `Z`.
///
/// The pair's soft histogram is the per-sample outer product of the two marginals, so
/// it has `num_bins²` bins. Normalization uses the pair's own self-information.
pub fn pair_mutual_information(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    z: ArrayView1<'_, f64>,
    config: &BsplineConfig,
) -> Result<f64> {
    check_pair(x, y)?;
    check_pair(x, z)?;
    let knots = config.knot_vector()?;
    let hx = SoftHistogram::from_values_unchecked(x, &knots);
    let hy = SoftHistogram::from_values_unchecked(y, &knots);
    let hz = SoftHistogram::from_values_unchecked(z, &knots);
    let hxy = hx.combine(&hy)?;

    let mut mi = hxy.entropy() + hz.entropy() - hxy.joint_entropy(&hz);
    if config.normalize {
        mi = normalize_mi(mi, hxy.self_information(), hz.self_information());
    }
    Ok(mi)
}

/// Three-way interaction information in bits:
/// `H(X,Y,Z) - H(X,Y) - H(Y,Z) - H(X,Z) + H(X) + H(Y) + H(Z)`.
///
/// Unlike pairwise MI this may be negative without any sign correction.
pub fn interaction_information(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    z: ArrayView1<'_, f64>,
    config: &BsplineConfig,
) -> Result<f64> {
    check_pair(x, y)?;
    check_pair(x, z)?;
    let knots = config.knot_vector()?;
    let hx = SoftHistogram::from_values_unchecked(x, &knots);
    let hy = SoftHistogram::from_values_unchecked(y, &knots);
    let hz = SoftHistogram::from_values_unchecked(z, &knots);

    let h_xyz = joint_entropy_of(&[hx.clone(), hy.clone(), hz.clone()])?;
    Ok(h_xyz - hx.joint_entropy(&hy) - hy.joint_entropy(&hz) - hx.joint_entropy(&hz)
        + hx.entropy()
        + hy.entropy()
        + hz.entropy())
}

/// Conditional mutual information `I(X; Y | Z)` in bits.
pub fn conditional_mutual_information(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    z: ArrayView1<'_, f64>,
    config: &BsplineConfig,
) -> Result<f64> {
    BsplineMutualInformation::cmi(&[x.to_owned(), y.to_owned()], &z.to_owned(), *config)
}
