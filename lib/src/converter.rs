use crate::config::ConversionConfig;
use crate::error::Error;
use crate::mapper::{AsciiArt, map_to_text};
use crate::sampler::sample;
use image::RgbaImage;

/// Convert a decoded bitmap to ASCII art
///
/// The full pipeline for one conversion:
/// 1. Validate the configuration
/// 2. Downscale the bitmap to the sample grid (aspect-corrected,
///    nearest-neighbor)
/// 3. Map each cell's luminance to a ramp glyph
///
/// One synchronous call per conversion; the bitmap is only borrowed and no
/// state is retained between calls.
///
/// # Arguments
/// * `bitmap` - The decoded source image
/// * `config` - Width, ramp and inversion settings for this conversion
///
/// # Returns
/// The finished art, or an `Error` for a zero-area bitmap or invalid width.
pub fn render_ascii(bitmap: &RgbaImage, config: &ConversionConfig) -> Result<AsciiArt, Error> {
    config.validate()?;
    let grid = sample(bitmap, config.target_width)?;
    Ok(map_to_text(&grid, &config.ramp, config.invert))
}
