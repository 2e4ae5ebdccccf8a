// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for tick labels and table cells.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value given the tick step.
///
/// The step decides the precision: integer steps print integers, fractional
/// steps print just enough decimals to distinguish neighboring ticks.
pub fn format_tick(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let decimals = step_decimals(step);
    if decimals == 0 {
        let rounded = v.round();
        #[allow(clippy::cast_possible_truncation, reason = "rounded before cast")]
        let n = rounded as i64;
        alloc::format!("{n}")
    } else {
        alloc::format!("{v:.decimals$}")
    }
}

/// Formats a number with thousands grouping and fixed decimals, like `1,234.50`.
pub fn format_grouped(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let formatted = alloc::format!("{:.decimals$}", v.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if v < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => alloc::format!("{sign}{grouped}.{f}"),
        None => alloc::format!("{sign}{grouped}"),
    }
}

/// Upper-cases the first character of `s`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

fn step_decimals(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 || step >= 1.0 {
        return 0;
    }
    let mut decimals = 0_usize;
    let mut s = step;
    while s < 1.0 && decimals < 12 {
        s *= 10.0;
        decimals += 1;
    }
    decimals
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn tick_precision_follows_step() {
        assert_eq!(format_tick(5.0, 5.0), "5");
        assert_eq!(format_tick(0.5, 0.25), "0.50");
        assert_eq!(format_tick(1000.0, 500.0), "1000");
    }

    #[test]
    fn grouped_inserts_thousands_separators() {
        assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(12.5, 2), "12.50");
        assert_eq!(format_grouped(-1234.0, 2), "-1,234.00");
        assert_eq!(format_grouped(999.0, 0), "999");
    }

    #[test]
    fn capitalize_first_character() {
        assert_eq!(capitalize("apples"), "Apples");
        assert_eq!(capitalize(""), "");
    }
}
