use crate::error::Error;
use image::{RgbaImage, imageops};

/// Derive the sample grid height for a target width
///
/// `floor(target_width * source_height / source_width * 0.5)`, clamped to a
/// minimum of 1. The 0.5 factor compensates for monospace glyph cells being
/// roughly twice as tall as wide, so the rendered art keeps the apparent
/// aspect ratio of the source. The clamp matters: a very wide, short source
/// at a small target width floors to 0 otherwise.
pub fn target_height(source_width: u32, source_height: u32, target_width: u32) -> u32 {
    let aspect = source_height as f32 / source_width as f32;
    let height = (target_width as f32 * aspect * 0.5).floor() as u32;
    height.max(1)
}

/// Downscale a bitmap to the sample grid for a given output width
///
/// One output cell per future ASCII character, sampled nearest-neighbor from
/// the source.
///
/// # Arguments
/// * `bitmap` - Decoded source image, borrowed for the duration of the call
/// * `target_width` - Output width in cells, must be >= 1
///
/// # Returns
/// An RGBA grid of exactly `target_width x target_height(..)` cells, or an
/// error if the bitmap has zero area or the width is below 1.
pub fn sample(bitmap: &RgbaImage, target_width: u32) -> Result<RgbaImage, Error> {
    let (width, height) = bitmap.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyBitmap { width, height });
    }
    if target_width < 1 {
        return Err(Error::InvalidTargetWidth(target_width));
    }

    let grid_height = target_height(width, height, target_width);
    Ok(imageops::resize(
        bitmap,
        target_width,
        grid_height,
        imageops::FilterType::Nearest,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_target_height_halves_aspect() {
        // 100x50 source at width 40: 40 * 0.5 * 0.5 = 10
        assert_eq!(target_height(100, 50, 40), 10);
    }

    #[test]
    fn test_target_height_square_source() {
        assert_eq!(target_height(64, 64, 80), 40);
    }

    #[test]
    fn test_target_height_clamps_to_one() {
        // 200x1 source at width 20 floors to 0 without the clamp
        assert_eq!(target_height(200, 1, 20), 1);
    }

    #[test]
    fn test_sample_dimensions() {
        let img = RgbaImage::new(100, 50);
        let grid = sample(&img, 40).unwrap();
        assert_eq!(grid.dimensions(), (40, 10));
    }

    #[test]
    fn test_sample_never_empty() {
        let img = RgbaImage::new(500, 2);
        let grid = sample(&img, 10).unwrap();
        assert_eq!(grid.dimensions(), (10, 1));
    }

    #[test]
    fn test_sample_zero_area_bitmap() {
        let img = RgbaImage::new(0, 32);
        assert_eq!(
            sample(&img, 40),
            Err(Error::EmptyBitmap { width: 0, height: 32 })
        );
    }

    #[test]
    fn test_sample_zero_width() {
        let img = RgbaImage::new(16, 16);
        assert_eq!(sample(&img, 0), Err(Error::InvalidTargetWidth(0)));
    }

    #[test]
    fn test_sample_preserves_solid_color() {
        // Nearest-neighbor on a solid image yields the same color everywhere
        let img = RgbaImage::from_pixel(64, 64, Rgba([10, 200, 30, 255]));
        let grid = sample(&img, 8).unwrap();
        for pixel in grid.pixels() {
            assert_eq!(*pixel, Rgba([10, 200, 30, 255]));
        }
    }
}
