// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color helpers: categorical palette and hover shading.

use peniko::Color;

/// The classic 10-color categorical palette.
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// Returns the `i`-th categorical color, wrapping past the palette length.
pub fn category10(i: usize) -> Color {
    CATEGORY10[i % CATEGORY10.len()]
}

/// Darkens or lightens a color by scaling each channel by
/// `(100 + percent) / 100`, clamped to `[0, 255]`.
///
/// Negative percentages darken (hover uses -30); alpha is preserved.
pub fn shade(color: Color, percent: i32) -> Color {
    let rgba = color.to_rgba8();
    let scale = |c: u8| -> u8 {
        let scaled = i32::from(c) * (100 + percent) / 100;
        #[allow(clippy::cast_possible_truncation, reason = "clamped before cast")]
        let out = scaled.clamp(0, 255) as u8;
        out
    };
    Color::from_rgba8(scale(rgba.r), scale(rgba.g), scale(rgba.b), rgba.a)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn shade_darkens_each_channel() {
        let c = Color::from_rgb8(100, 200, 50);
        let darker = shade(c, -30).to_rgba8();
        assert_eq!((darker.r, darker.g, darker.b), (70, 140, 35));
    }

    #[test]
    fn shade_clamps_to_channel_range() {
        let c = Color::from_rgb8(200, 200, 200);
        let lighter = shade(c, 50).to_rgba8();
        assert_eq!((lighter.r, lighter.g, lighter.b), (255, 255, 255));
    }

    #[test]
    fn shade_preserves_alpha() {
        let c = Color::from_rgba8(100, 100, 100, 128);
        assert_eq!(shade(c, -30).to_rgba8().a, 128);
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(category10(0), category10(10));
    }
}
