// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # B-spline Soft-Histogram Estimation
//!
//! Entropy and mutual information for continuous data without a parametric model.
//! Instead of dropping each sample into exactly one bin, every sample is spread over
//! `spline_order` neighbouring bins with weights given by B-spline basis functions
//! (Daub et al., 2004). Shannon quantities are then read off the soft occupancies.
//!
//! ## Pipeline
//!
//! 1. [`KnotVector`]: clamped uniform knots on `[0, 1]` for `(num_bins, spline_order)`.
//! 2. [`normalize`]: rescale raw samples onto `[0, 1]` (constant data is widened by 1).
//! 3. [`basis_function`]: recursive Cox–de Boor evaluation.
//! 4. [`weight_matrix`]: `num_bins x n` soft assignment, columns summing to 1.
//! 5. [`entropy()`], [`joint_entropy`], [`triple_joint_entropy`]: bits from occupancies
//!    `h_b = mean_s w[b, s]`, skipping empty bins.
//! 6. [`BsplineMutualInformation`] and [`BsplineMutualInformationBatchRows`].
//!
//! Spline order 1 reduces everything to classical hard histograms.
//!
//! ## Numeric policy
//!
//! Normalized MI divides by `max(2H(X) - H(X,X), 2H(Y) - H(Y,Y))` and falls back to a
//! divisor of 1 when that maximum is exactly 0. Both this and the +1 widening of
//! degenerate ranges are part of the estimator's contract and keep values comparable
//! with earlier B-spline MI results.

pub mod basis;
pub mod batch;
pub mod config;
pub mod entropy;
pub mod knots;
pub mod mutual_information;
pub mod normalize;
pub mod weights;

pub use basis::{KNOT_TOLERANCE, basis_function};
pub use batch::{BsplineMutualInformationBatchRows, ReferenceContext, batch_mutual_information};
pub use config::BsplineConfig;
pub use entropy::{BsplineEntropy, SoftHistogram, entropy, joint_entropy, triple_joint_entropy};
pub use knots::{KnotVector, knot_vector};
pub use mutual_information::{
    BsplineMutualInformation, conditional_mutual_information, interaction_information,
    mutual_information, pair_mutual_information,
};
pub use normalize::normalize;
pub use weights::{combine_weights, normalized_weight_matrix, weight_matrix, weights};
