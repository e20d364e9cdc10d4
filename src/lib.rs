// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # bsplinemi
//!
//! Entropy and mutual information for continuous variables using B-spline soft
//! histograms: each sample is spread over neighbouring bins by B-spline basis functions
//! and Shannon quantities (in bits) are computed from the resulting soft occupancies.
//!
//! ## Quick Start
//!
//! ```rust
//! use bsplinemi::estimators::approaches::BsplineConfig;
//! use bsplinemi::estimators::mutual_information::MutualInformation;
//! use bsplinemi::estimators::traits::GlobalValue;
//! use ndarray::array;
//!
//! let x = array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = array![5.0, 4.0, 3.0, 2.0, 1.0, 0.0];
//! let config = BsplineConfig::new(6, 3).with_sign_correct(true);
//!
//! let mi = MutualInformation::new_bspline(x.view(), y.view(), &config)?.global_value();
//! assert!((mi + 1.0).abs() < 1e-9);
//! # Ok::<(), bsplinemi::BsplineError>(())
//! ```
//!
//! ## Features
//!
//! | Measure | B-spline |
//! |---------|----------|
//! | Entropy | ✅ |
//! | Joint Entropy (any number of variables) | ✅ |
//! | Mutual Information (normalized, sign-corrected) | ✅ |
//! | Batch MI (one reference vs. many rows) | ✅ |
//! | Conditional / Interaction Information | ✅ |
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: Factory types (`Entropy`, `MutualInformation`) and the free
//!    functions re-exported below
//! 2. **Estimation Approach**: `estimators::approaches::bspline`
//! 3. **Core Infrastructure**: Shared traits, errors, labeled matrices
//!
//! ## Feature Flags
//!
//! - `parallel`: Evaluate batch rows on the rayon thread pool
//!
//! ## Diagnostics
//!
//! Estimators emit `tracing` events at `debug` (setup) and `trace` (per batch row)
//! level. Install any subscriber in the application to see them.

pub mod error;
pub mod estimators;

pub use error::{BsplineError, Result};
pub use estimators::approaches::bspline::{
    batch_mutual_information, entropy, joint_entropy, knot_vector, mutual_information, weights,
};
pub use estimators::traits::{GlobalValue, JointEntropy, OptionalLocalValues};
pub use estimators::utils::labeled_matrix::LabeledMatrix;
