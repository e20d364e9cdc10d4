// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors raised by the B-spline estimators and the labeled matrix loader.
///
/// All numeric failures are input or configuration errors; the computations are
/// pure and deterministic, so nothing here is worth retrying.
#[derive(Debug, Error)]
pub enum BsplineError {
    /// Vector lengths disagree, or a matrix does not have the expected shape.
    #[error("invalid dimensions: expected {expected}, got {actual}")]
    InvalidDimensions { expected: usize, actual: usize },

    /// `num_bins < spline_order`, or either of them is zero.
    #[error("invalid bin configuration: {num_bins} bins with spline order {spline_order}")]
    InvalidBinConfig { num_bins: usize, spline_order: usize },

    #[error("input contains no samples")]
    EmptyInput,

    /// Explicit domain bounds that are not finite or are inverted.
    #[error("invalid domain: [{min}, {max}]")]
    InvalidDomain { min: f64, max: f64 },

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Field separators must be a single ASCII character.
    #[error("invalid delimiter {0:?}")]
    InvalidDelimiter(char),

    #[error("unknown label {0:?}")]
    UnknownLabel(String),

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BsplineError>;

/// Fail with [`BsplineError::InvalidDimensions`] unless `actual == expected`.
pub(crate) fn ensure_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(BsplineError::InvalidDimensions { expected, actual });
    }
    Ok(())
}
