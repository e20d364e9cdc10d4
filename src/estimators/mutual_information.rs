use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::Result;
use crate::estimators::approaches::bspline::{
    BsplineConfig, BsplineMutualInformation, BsplineMutualInformationBatchRows, KnotVector,
};
use crate::estimators::traits::{ConditionalMutualInformationTrait, MutualInformationTrait};

/// Mutual information estimation methods for continuous data
pub struct MutualInformation;

impl MutualInformation {
    /// Pairwise B-spline MI; both variables share the configuration's binning
    pub fn new_bspline(
        x: ArrayView1<'_, f64>,
        y: ArrayView1<'_, f64>,
        config: &BsplineConfig,
    ) -> Result<BsplineMutualInformation> {
        BsplineMutualInformation::new(x, y, config)
    }

    /// Pairwise B-spline MI with separate binning for each variable
    ///
    /// `normalize` and `sign_correct` are taken from `config_x`.
    pub fn new_bspline_with_configs(
        x: ArrayView1<'_, f64>,
        y: ArrayView1<'_, f64>,
        config_x: &BsplineConfig,
        config_y: &BsplineConfig,
    ) -> Result<BsplineMutualInformation> {
        let knots_x = KnotVector::new(config_x.num_bins, config_x.spline_order)?;
        let knots_y = KnotVector::new(config_y.num_bins, config_y.spline_order)?;
        BsplineMutualInformation::with_knots(x, y, &knots_x, &knots_y, config_x.normalize, config_x.sign_correct)
    }

    /// One reference vector against every row of `data`
    pub fn new_bspline_batch<'a>(
        reference: ArrayView1<'_, f64>,
        data: ArrayView2<'a, f64>,
        config: &BsplineConfig,
    ) -> Result<BsplineMutualInformationBatchRows<'a>> {
        BsplineMutualInformationBatchRows::new(reference, data, config)
    }

    /// Two series: pairwise MI. More: total correlation (unnormalized)
    pub fn bspline_multi(series: &[Array1<f64>], config: BsplineConfig) -> Result<f64> {
        BsplineMutualInformation::mutual_information(series, config)
    }

    /// Conditional MI `I(X1; ...; Xn | Z)` in bits
    pub fn bspline_conditional(series: &[Array1<f64>], cond: &Array1<f64>, config: BsplineConfig) -> Result<f64> {
        BsplineMutualInformation::cmi(series, cond, config)
    }
}
