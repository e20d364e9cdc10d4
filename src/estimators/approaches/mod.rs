pub mod bspline;

// Re-exports so tests and users can import
// bsplinemi::estimators::approaches::* ergonomically.
pub use bspline::{
    BsplineConfig, BsplineEntropy, BsplineMutualInformation, BsplineMutualInformationBatchRows,
    KnotVector, SoftHistogram,
};
