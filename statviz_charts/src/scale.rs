// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate scales.
//!
//! Each scale comes in two forms: a `*Spec` holding the domain and options,
//! and a concrete scale produced by `instantiate` once an output range is
//! known. Chart builders derive specs from data, guides and series then
//! instantiate them against the same plot rectangle so coordinates agree.
//!
//! Degenerate domains (`min == max`) map every input to the midpoint of the
//! range instead of producing `NaN`.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ChartError;
use crate::time;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain + options, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Whether to "nice" the domain based on tick generation.
    pub nice: bool,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain maps everything to the range midpoint.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return 0.5 * (r0 + r1);
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns "nice-ish" tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
        }
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Returns the effective domain after applying `nice` (if enabled).
    pub fn resolved_domain(&self, tick_count: usize) -> (f64, f64) {
        if !self.nice {
            return self.domain;
        }
        let ticks = nice_ticks(self.domain.0, self.domain.1, tick_count);
        match ticks[..] {
            [first, .., last] => (first, last),
            _ => self.domain,
        }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }

    /// Instantiates a concrete scale using the `resolved_domain` (respecting `nice`).
    pub fn instantiate_resolved(&self, range: (f64, f64), tick_count: usize) -> ScaleLinear {
        ScaleLinear::new(self.resolved_domain(tick_count), range)
    }
}

pub(crate) fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// Like [`nice_ticks`], but only returns ticks inside `[min, max]`.
///
/// Used for histogram thresholds, where a threshold outside the domain would
/// create an empty phantom bin.
pub(crate) fn ticks_within(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || min == max {
        return Vec::new();
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count.max(1) as f64);
    if step == 0.0 {
        return Vec::new();
    }
    let start = (min / step).ceil() * step;
    let stop = (max / step).floor() * step;
    let n_f = ((stop - start) / step).round();
    if !n_f.is_finite() || n_f < 0.0 {
        return Vec::new();
    }
    let n_f = n_f.min(10_000.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by finite/non-negative checks and capped at 10k"
    )]
    let n = n_f as u64;
    (0..=n).map(|i| start + step * i as f64).collect()
}

pub(crate) fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A discrete band scale for categorical charts.
#[derive(Clone, Copy, Debug)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

/// Specification for a band scale (count + padding, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleBandSpec {
    /// Number of bands.
    pub count: usize,
    /// Inner padding in band units.
    pub padding_inner: f64,
    /// Outer padding in band units.
    pub padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the leading edge of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }
}

impl ScaleBandSpec {
    /// Creates a new band scale spec with default padding.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleBand {
        ScaleBand::new(range, self.count).with_padding(self.padding_inner, self.padding_outer)
    }
}

/// A log-scale mapping from a strictly positive domain to a range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

/// Specification for a log scale (domain + base, no range yet).
///
/// Construction is validated: a domain touching zero or below is rejected.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLogSpec {
    domain: (f64, f64),
    base: f64,
}

impl ScaleLog {
    fn new(domain: (f64, f64), range: (f64, f64), base: f64) -> Self {
        Self {
            domain,
            range,
            base,
        }
    }

    fn log_base(&self, x: f64) -> f64 {
        let denom = self.base.ln();
        if denom == 0.0 { x.ln() } else { x.ln() / denom }
    }

    /// Maps a value from domain space into range space.
    ///
    /// Non-positive inputs have no logarithm and clamp to the low end of the
    /// range; a degenerate domain maps to the range midpoint.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if x <= 0.0 {
            return r0;
        }
        let ld0 = self.log_base(d0);
        let ld1 = self.log_base(d1);
        let denom = ld1 - ld0;
        if denom == 0.0 {
            return 0.5 * (r0 + r1);
        }
        let t = (self.log_base(x) - ld0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns tick values: powers of `base` within the domain, capped by `count`.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut min, mut max) = self.domain;
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        let min_e = {
            let e = self
                .log_base(min)
                .floor()
                .clamp(i32::MIN as f64, i32::MAX as f64);
            #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
            {
                e as i32
            }
        };
        let max_e = {
            let e = self
                .log_base(max)
                .ceil()
                .clamp(i32::MIN as f64, i32::MAX as f64);
            #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
            {
                e as i32
            }
        };
        let mut out = Vec::new();
        for e in min_e..=max_e {
            out.push(self.base.powi(e));
            if count != 0 && out.len() >= count {
                break;
            }
        }
        out
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

impl ScaleLogSpec {
    /// Creates a new log scale spec.
    ///
    /// Fails with [`ChartError::NonPositiveLogDomain`] if either end of the
    /// domain is not a strictly positive finite number.
    pub fn new(domain: (f64, f64)) -> Result<Self, ChartError> {
        let (min, max) = domain;
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || max <= 0.0 {
            return Err(ChartError::NonPositiveLogDomain { min, max });
        }
        Ok(Self { domain, base: 10.0 })
    }

    /// Sets the log base. Invalid bases fall back to 10.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    /// Returns the validated domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLog {
        ScaleLog::new(self.domain, range, self.base)
    }
}

/// A time scale: a linear mapping over timestamps in seconds, with calendar
/// aware tick steps.
#[derive(Clone, Copy, Debug)]
pub struct ScaleTime {
    inner: ScaleLinear,
}

/// Specification for a time scale (domain, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleTimeSpec {
    /// Domain in timestamp seconds.
    pub domain: (f64, f64),
    /// Whether to extend the domain to nice tick boundaries.
    pub nice: bool,
}

impl ScaleTime {
    /// Creates a new time scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            inner: ScaleLinear::new(domain, range),
        }
    }

    /// Maps a timestamp value into range space.
    pub fn map(&self, t: f64) -> f64 {
        self.inner.map(t)
    }

    /// Returns "nice" tick values for the time domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        time::nice_time_ticks_seconds(self.inner.domain_min(), self.inner.domain_max(), count)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.inner.domain_min()
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.inner.domain_max()
    }
}

impl ScaleTimeSpec {
    /// Creates a new time scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
        }
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Returns the effective domain after applying `nice` (if enabled).
    pub fn resolved_domain(&self, tick_count: usize) -> (f64, f64) {
        if !self.nice {
            return self.domain;
        }
        let ticks = time::nice_time_ticks_seconds(self.domain.0, self.domain.1, tick_count);
        match ticks[..] {
            [first, .., last] => (first, last),
            _ => self.domain,
        }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleTime {
        ScaleTime::new(self.domain, range)
    }

    /// Instantiates a concrete scale using the `resolved_domain` (respecting `nice`).
    pub fn instantiate_resolved(&self, range: (f64, f64), tick_count: usize) -> ScaleTime {
        ScaleTime::new(self.resolved_domain(tick_count), range)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_maps_endpoints_to_range() {
        let s = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
        assert!((s.map(0.0) - 100.0).abs() < 1e-9);
        assert!((s.map(10.0) - 0.0).abs() < 1e-9);
        assert!((s.map(5.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let s = ScaleLinear::new((4.0, 4.0), (0.0, 100.0));
        assert!((s.map(4.0) - 50.0).abs() < 1e-9);
        assert!((s.map(123.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn nice_domain_extends_to_round_bounds() {
        let spec = ScaleLinearSpec::new((0.0, 97.0)).with_nice(true);
        let (lo, hi) = spec.resolved_domain(10);
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 100.0);
    }

    #[test]
    fn band_positions_partition_the_range() {
        let band = ScaleBand::new((0.0, 110.0), 5).with_padding(0.1, 0.1);
        let bw = band.band_width();
        assert!(bw > 0.0);
        assert!(band.x(0) >= 0.0);
        assert!(band.x(4) + bw <= 110.0 + 1e-9);
        assert!(band.x(1) > band.x(0) + bw);
    }

    #[test]
    fn log_spec_rejects_non_positive_domains() {
        assert!(matches!(
            ScaleLogSpec::new((0.0, 100.0)),
            Err(ChartError::NonPositiveLogDomain { .. })
        ));
        assert!(matches!(
            ScaleLogSpec::new((-5.0, 100.0)),
            Err(ChartError::NonPositiveLogDomain { .. })
        ));
        assert!(ScaleLogSpec::new((200.0, 100_000.0)).is_ok());
    }

    #[test]
    fn log_scale_maps_decades_evenly() {
        let s = ScaleLogSpec::new((1.0, 100.0)).unwrap().instantiate((0.0, 10.0));
        assert!((s.map(1.0) - 0.0).abs() < 1e-9);
        assert!((s.map(10.0) - 5.0).abs() < 1e-9);
        assert!((s.map(100.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn log_scale_clamps_non_positive_inputs() {
        let s = ScaleLogSpec::new((1.0, 100.0)).unwrap().instantiate((0.0, 10.0));
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(-3.0), 0.0);
    }

    #[test]
    fn ticks_within_stay_inside_the_domain() {
        let ticks = ticks_within(2.0, 33.0, 10);
        assert!(ticks.iter().all(|&t| (2.0..=33.0).contains(&t)));
        assert!(ticks.len() > 2);
    }
}
