// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Descriptive statistics over numeric slices.
//!
//! Non-finite inputs are the caller's problem; dataset accessors reject them
//! before values reach this module.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Returns the arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Returns the sample standard deviation (n - 1 denominator), or `None` for
/// fewer than two values.
pub fn deviation(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Returns `(min, max)`, or `None` for an empty slice.
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    let mut min = first;
    let mut max = first;
    for v in iter {
        min = min.min(v);
        max = max.max(v);
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn mean_of_known_values() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), Some(4.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn deviation_is_sample_stddev() {
        // Variance of [2, 4, 4, 4, 5, 5, 7, 9] with n-1 is 32/7.
        let d = deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((d - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(deviation(&[3.0]), None);
    }

    #[test]
    fn extent_tracks_min_and_max() {
        assert_eq!(extent(&[3.0, -1.0, 7.0, 2.0]), Some((-1.0, 7.0)));
        assert_eq!(extent(&[]), None);
    }
}
