// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float math for `no_std` builds.
//!
//! `core` has no `f64::floor`, `f64::ln` and friends; this trait fills in the
//! methods the scales, stats and pie geometry need, backed by `libm` when the
//! `std` feature is off.

/// The `f64` math methods this crate uses, for `no_std` mode.
#[cfg(not(feature = "std"))]
pub(crate) trait FloatExt {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn ln(self) -> Self;
    fn log10(self) -> Self;
    fn powf(self, n: Self) -> Self;
    fn powi(self, n: i32) -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    fn round(self) -> Self {
        libm::round(self)
    }

    fn ln(self) -> Self {
        libm::log(self)
    }

    fn log10(self) -> Self {
        libm::log10(self)
    }

    fn powf(self, n: Self) -> Self {
        libm::pow(self, n)
    }

    // Square-and-multiply; libm has no direct powi equivalent.
    fn powi(self, n: i32) -> Self {
        let mut base = self;
        let mut exp = i64::from(n);
        if exp < 0 {
            base = 1.0 / base;
            exp = -exp;
        }
        let mut acc = 1.0;
        #[allow(
            clippy::cast_sign_loss,
            reason = "exp is non-negative after the flip above"
        )]
        let mut e = exp as u64;
        while e != 0 {
            if !e.is_multiple_of(2) {
                acc *= base;
            }
            base *= base;
            e >>= 1;
        }
        acc
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn cos(self) -> Self {
        libm::cos(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("statviz_charts requires either the `std` or `libm` feature");
