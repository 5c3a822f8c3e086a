use crate::ramp::CharacterRamp;
use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use std::fmt;

/// Finished ASCII art: equal-length lines of glyphs
///
/// Immutable once produced. `width` and `height` match the sample grid the
/// art was mapped from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    text: String,
    width: u32,
    height: u32,
}

impl AsciiArt {
    /// The full text, each row terminated with `\n`
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Width in characters per line
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of lines
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Iterate over the lines without terminators
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Normalized brightness of one grid cell, after alpha scaling and inversion
///
/// Luminance is the weighted sum `0.299*R + 0.587*G + 0.114*B` over [0, 1],
/// then scaled by `A/255`. Transparent cells therefore read as dark no
/// matter their color; this is a deliberate approximation (no background
/// blending) kept for output compatibility. Inversion applies last.
fn cell_brightness(pixel: &Rgba<u8>, invert: bool) -> f32 {
    let r = pixel[0] as f32;
    let g = pixel[1] as f32;
    let b = pixel[2] as f32;
    let a = pixel[3] as f32;

    let luminance = (0.299 * r + 0.587 * g + 0.114 * b) / 255.0;
    let brightness = luminance * (a / 255.0);

    if invert { 1.0 - brightness } else { brightness }
}

/// Pick the ramp glyph for a brightness value in [0, 1]
///
/// `floor(brightness * (len - 1))`, clamped into the ramp. The clamp guards
/// the brightness = 1.0 float edge from indexing out of bounds.
fn select_glyph(ramp: &CharacterRamp, brightness: f32) -> char {
    let index = (brightness * (ramp.len() - 1) as f32).floor() as usize;
    ramp.glyph(index.min(ramp.len() - 1))
}

/// Map a sample grid to ASCII art
///
/// Pure and total: every valid grid and ramp produces exactly
/// `grid.height()` lines of `grid.width()` glyphs each. Rows are independent
/// and mapped in parallel.
///
/// # Arguments
/// * `grid` - Sample grid from [`crate::sampler::sample`]
/// * `ramp` - Glyph lookup table, darkest first
/// * `invert` - Swap dark and bright ends of the ramp
pub fn map_to_text(grid: &RgbaImage, ramp: &CharacterRamp, invert: bool) -> AsciiArt {
    let (width, height) = grid.dimensions();

    let rows: Vec<String> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = String::with_capacity(width as usize + 1);
            for x in 0..width {
                let brightness = cell_brightness(grid.get_pixel(x, y), invert);
                row.push(select_glyph(ramp, brightness));
            }
            row.push('\n');
            row
        })
        .collect();

    AsciiArt {
        text: rows.concat(),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::RampPreset;

    fn standard() -> CharacterRamp {
        CharacterRamp::from(RampPreset::Standard)
    }

    #[test]
    fn test_black_maps_to_darkest() {
        let brightness = cell_brightness(&Rgba([0, 0, 0, 255]), false);
        assert_eq!(select_glyph(&standard(), brightness), ' ');
    }

    #[test]
    fn test_white_maps_to_brightest() {
        let brightness = cell_brightness(&Rgba([255, 255, 255, 255]), false);
        assert_eq!(select_glyph(&standard(), brightness), '@');
    }

    #[test]
    fn test_invert_swaps_extremes() {
        let ramp = standard();
        let white = cell_brightness(&Rgba([255, 255, 255, 255]), true);
        assert_eq!(select_glyph(&ramp, white), ' ');
        let black = cell_brightness(&Rgba([0, 0, 0, 255]), true);
        assert_eq!(select_glyph(&ramp, black), '@');
    }

    #[test]
    fn test_transparent_maps_to_darkest() {
        // Alpha 0 zeroes the brightness regardless of color
        for color in [[255, 0, 0], [0, 255, 0], [255, 255, 255]] {
            let px = Rgba([color[0], color[1], color[2], 0]);
            assert_eq!(cell_brightness(&px, false), 0.0);
            assert_eq!(select_glyph(&standard(), cell_brightness(&px, false)), ' ');
        }
    }

    #[test]
    fn test_transparent_inverted_maps_to_brightest() {
        // Inversion applies after alpha scaling, so transparent flips to bright
        let px = Rgba([0, 0, 0, 0]);
        assert_eq!(select_glyph(&standard(), cell_brightness(&px, true)), '@');
    }

    #[test]
    fn test_half_alpha_halves_brightness() {
        let opaque = cell_brightness(&Rgba([200, 200, 200, 255]), false);
        let half = cell_brightness(&Rgba([200, 200, 200, 127]), false);
        assert!((half - opaque * 127.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_glyph_index_monotonic_in_gray_level() {
        // Raising luminance never selects an earlier ramp glyph
        let ramp = standard();
        let glyphs: Vec<char> = " .:-=+*#%@".chars().collect();
        let mut prev = 0usize;
        for v in 0..=255u8 {
            let b = cell_brightness(&Rgba([v, v, v, 255]), false);
            let ch = select_glyph(&ramp, b);
            let idx = glyphs.iter().position(|&c| c == ch).unwrap();
            assert!(idx >= prev, "index dropped at gray level {v}");
            prev = idx;
        }
    }

    #[test]
    fn test_brightness_one_does_not_overflow() {
        // Exact 1.0 must clamp into the ramp, not index past it
        assert_eq!(select_glyph(&standard(), 1.0), '@');
        assert_eq!(select_glyph(&standard(), 0.0), ' ');
    }

    #[test]
    fn test_map_shape() {
        let grid = RgbaImage::from_pixel(7, 3, Rgba([128, 128, 128, 255]));
        let art = map_to_text(&grid, &standard(), false);
        assert_eq!(art.width(), 7);
        assert_eq!(art.height(), 3);
        assert_eq!(art.lines().count(), 3);
        for line in art.lines() {
            assert_eq!(line.chars().count(), 7);
        }
    }

    #[test]
    fn test_map_ends_with_newline() {
        let grid = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 255]));
        let art = map_to_text(&grid, &standard(), false);
        assert_eq!(art.text(), "@@\n");
    }

    #[test]
    fn test_invert_matches_reversed_ramp_at_extremes() {
        // At exact boundary luminances the inverted ramp and the reversed
        // ramp select the same glyphs
        let ramp = standard();
        let mut grid = RgbaImage::new(2, 1);
        grid.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        grid.put_pixel(1, 0, Rgba([255, 255, 255, 255]));

        let inverted = map_to_text(&grid, &ramp, true);
        let reversed = map_to_text(&grid, &ramp.reversed(), false);
        assert_eq!(inverted.text(), reversed.text());
    }

    #[test]
    fn test_display_matches_text() {
        let grid = RgbaImage::from_pixel(3, 1, Rgba([0, 0, 0, 255]));
        let art = map_to_text(&grid, &standard(), false);
        assert_eq!(format!("{art}"), art.text());
    }
}
