// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::error::{BsplineError, Result};

/// Rescale `values` onto `[0, 1]` via `(x - min) / (max - min)`.
///
/// With `domain == None` the bounds are the data's own minimum and maximum. A
/// degenerate range (`max == min`, e.g. a constant vector) is widened to `min + 1`
/// so every sample maps to 0 instead of dividing by zero.
///
/// Explicit bounds must be finite with `max >= min`. Inverted bounds fail with
/// [`BsplineError::InvalidDomain`]; they are not taken as a mirrored scale.
/// Samples outside explicit bounds map outside `[0, 1]`.
pub fn normalize(values: ArrayView1<'_, f64>, domain: Option<(f64, f64)>) -> Result<Array1<f64>> {
    if values.is_empty() {
        return Err(BsplineError::EmptyInput);
    }
    let (min, max) = match domain {
        Some((min, max)) => {
            if !min.is_finite() || !max.is_finite() || max < min {
                return Err(BsplineError::InvalidDomain { min, max });
            }
            (min, max)
        }
        None => data_range(values),
    };
    Ok(rescale(values, min, max))
}

/// Minimum and maximum of a non-empty vector.
pub(crate) fn data_range(values: ArrayView1<'_, f64>) -> (f64, f64) {
    let first = values[0];
    values
        .iter()
        .skip(1)
        .fold((first, first), |(lo, hi), &v| (if v < lo { v } else { lo }, if v > hi { v } else { hi }))
}

pub(crate) fn rescale(values: ArrayView1<'_, f64>, min: f64, max: f64) -> Array1<f64> {
    let max = if max == min { min + 1.0 } else { max };
    let width = max - min;
    values.mapv(|x| (x - min) / width)
}
