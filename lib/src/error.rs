use thiserror::Error;

/// Errors for invalid conversion inputs
///
/// All variants are detected up front; a failed conversion never produces
/// partial output. Decode failures stay with the caller, the library only
/// ever sees an already-decoded bitmap.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Source bitmap has zero area
    #[error("source bitmap has zero area: {width}x{height}")]
    EmptyBitmap { width: u32, height: u32 },

    /// Requested output width is below the minimum of 1
    #[error("target width must be at least 1, got {0}")]
    InvalidTargetWidth(u32),

    /// Character ramp is too short to act as a lookup table
    #[error("character ramp needs at least 2 glyphs, got {0}")]
    RampTooShort(usize),
}
