use ndarray::Array1;

use crate::error::Result;
use crate::estimators::approaches::bspline::{BsplineConfig, BsplineEntropy};
pub use crate::estimators::traits::{GlobalValue, JointEntropy};

/// Entropy estimation methods for continuous data
///
/// This struct provides static methods for creating entropy estimators.
pub struct Entropy;

impl Entropy {
    /// Creates a new B-spline entropy estimator for 1D continuous data
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of samples
    /// * `config` - Bin count and spline order (flags for MI are ignored here)
    ///
    /// # Returns
    ///
    /// An estimator whose `global_value()` is the soft-histogram entropy in bits,
    /// or an error for an empty input or an invalid bin configuration.
    pub fn new_bspline(data: Array1<f64>, config: BsplineConfig) -> Result<BsplineEntropy> {
        BsplineEntropy::new(data, config)
    }

    /// Joint entropy (bits) of several equally long series sharing one configuration
    pub fn bspline_joint(series: &[Array1<f64>], config: BsplineConfig) -> Result<f64> {
        BsplineEntropy::joint_entropy(series, config)
    }
}
